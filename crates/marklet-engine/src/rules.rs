//! Syntax rules: structural checks that demote markup back to plain text.
//!
//! The parser accepts any properly delimited span. Some of those are still
//! not meant as markup, e.g. bold inside italic or emphasis in the middle of
//! `Text_12_3`. Each rule walks the AST once and demotes every child that
//! breaks it, splicing the child's content into its parent in place:
//!
//! ```text
//! Italic                  Italic
//!   "a "                    "a "
//!   Bold           ==>      "__"
//!     "b"                   "b"
//!   " c"                    "__"
//!                           " c"
//! ```
//!
//! Spliced nodes are checked against the same parent in turn, so a violation
//! exposed by a demotion is caught in the same pass.

use std::collections::VecDeque;
use std::fmt;

use marklet_syntax::{MarkupKind, NodeId, Tree};
use serde::{Deserialize, Serialize};

use crate::ast::Ast;

/// A named structural rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyntaxRule {
    /// Bold may not appear directly inside italic.
    Nesting,
    /// Mid-word emphasis may not contain digits.
    Number,
    /// Mid-word emphasis may not span more than one word.
    CrossWordBoundary,
}

/// Read-only inputs the rules consult besides the tree.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub word_delimiters: &'a [char],
}

impl SyntaxRule {
    pub const DEFAULT_ORDER: [SyntaxRule; 3] = [
        SyntaxRule::Nesting,
        SyntaxRule::Number,
        SyntaxRule::CrossWordBoundary,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Nesting => "nesting",
            Self::Number => "number",
            Self::CrossWordBoundary => "cross_word_boundary",
        }
    }

    /// Returns true if `child`, sitting under `parent`, breaks this rule.
    pub fn is_violated(self, ast: &Ast, child: NodeId, parent: NodeId, ctx: &RuleContext) -> bool {
        let node = ast.node(child);
        match self {
            Self::Nesting => {
                node.kind == MarkupKind::Bold && ast.node(parent).kind == MarkupKind::Italic
            }
            Self::Number => {
                node.inside_word
                    && node.kind.is_emphasis()
                    && ast.any_descendant_text(child, |text| {
                        text.bytes().any(|b| b.is_ascii_digit())
                    })
            }
            Self::CrossWordBoundary => {
                node.inside_word
                    && node.kind.is_emphasis()
                    && ast.any_descendant_text(child, |text| {
                        text.chars().any(|c| ctx.word_delimiters.contains(&c))
                    })
            }
        }
    }

    /// Demote every violating node. Returns how many were demoted.
    pub fn apply(self, ast: &mut Ast, ctx: &RuleContext) -> usize {
        let mut demoted = 0;
        let mut stack = vec![ast.root()];

        while let Some(parent) = stack.pop() {
            let mut pending: VecDeque<NodeId> = ast.take_children(parent).into();
            let mut kept = Vec::with_capacity(pending.len());

            while let Some(child) = pending.pop_front() {
                if self.is_violated(ast, child, parent, ctx) {
                    let spilled = ast.demote(child);
                    for &id in spilled.iter().rev() {
                        pending.push_front(id);
                    }
                    demoted += 1;
                }
                kept.push(child);
            }

            stack.extend(
                kept.iter()
                    .rev()
                    .copied()
                    .filter(|&id| !ast.children(id).is_empty()),
            );
            ast.set_children(parent, kept);
        }

        log::debug!("rule {self} demoted {demoted} nodes");
        demoted
    }
}

impl fmt::Display for SyntaxRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
