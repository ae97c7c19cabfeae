//! # Parser - Table-Driven Tree Construction
//!
//! Turns the token stream into a [`ParseTree`] in one forward pass, with no
//! backtracking and no recursion.
//!
//! ## The Current Node
//!
//! The parser keeps a single "current node" pointer. Opening a delimiter
//! creates a child of the current node and moves the pointer down; closing
//! moves it back up to the parent. Tokens that do not open or close anything
//! are appended to the current node.
//!
//! Every tree starts as:
//!
//! ```text
//! Document
//!   Line          <- current
//! ```
//!
//! ## Transitions
//!
//! What a token does depends on its kind, its behavior and the current node,
//! looked up in the ordered table in [`transition`]. The table never fails:
//! a delimiter that cannot open or close anything becomes an incomplete node
//! with no children, which later stages render as the literal delimiter.
//!
//! ```text
//! "a _b_"  ->  Document[Line[Text("a ") Italic[Text("b")]]]
//! "a_ b"   ->  Document[Line[Text("a") Italic?[] Text(" b")]]
//! ```
//!
//! A newline closes every open node back to the Document. Headings and lines
//! it closes are complete; emphasis it closes is not.
//!
//! ## Public API
//!
//! ```
//! use marklet_syntax::lexer::{TokenizerConfig, tokenize};
//! use marklet_syntax::parser::parse;
//! use marklet_syntax::tree::Tree;
//!
//! let source = "# Hello\nworld";
//! let tokens = tokenize(source, &TokenizerConfig::default());
//! let tree = parse(&tokens);
//!
//! // Document with two lines
//! assert_eq!(tree.children(tree.root()).len(), 2);
//! ```

pub mod transition;
mod tree;

pub use tree::{ParseNode, ParseTree};

use crate::lexer::Token;
use crate::span::Span;
use crate::syntax_kind::{MarkupKind, TokenBehavior};
use transition::{Action, Frame};

/// The parser state machine: a token slice and the tree under construction.
pub struct Parser<'t> {
    tokens: &'t [Token],
    tree: ParseTree,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            tree: ParseTree::new(),
        }
    }

    /// Consume every token and return the finished tree.
    pub fn parse(mut self) -> ParseTree {
        self.tree.open(MarkupKind::Line, Span::empty(0), false);
        for token in self.tokens {
            self.step(token);
        }
        self.close_to_document();
        log::debug!(
            "parsed {} tokens into {} nodes",
            self.tokens.len(),
            self.tree.len()
        );
        self.tree
    }

    fn frame(&self) -> Frame {
        let node = self.tree.current_node();
        Frame {
            kind: node.kind,
            is_empty: node.children.is_empty(),
        }
    }

    fn step(&mut self, token: &Token) {
        let frame = self.frame();
        let row = transition::select(token, frame);
        log::trace!(
            "{:?}/{:?} at {:?} in {:?}: {}",
            token.kind,
            token.behavior,
            token.span,
            frame.kind,
            row.name
        );

        match row.action {
            Action::Open => {
                self.tree.open(token.kind, token.span, false);
            }
            Action::OpenInsideWord => {
                self.tree.open(token.kind, token.span, true);
            }
            Action::Close => self.tree.close_current_with(token.span),
            Action::Abort => {
                self.tree.close_current(false);
                self.tree.literal(token.kind, token.span);
            }
            Action::BreakLine => {
                self.close_to_document();
                self.tree.open(MarkupKind::Line, token.span, false);
            }
            Action::Append => {
                self.tree.append_text(token.span);
            }
            Action::Literal => {
                self.tree.literal(token.kind, token.span);
            }
            Action::Fallback => {
                if token.behavior == TokenBehavior::Closing
                    && !matches!(frame.kind, MarkupKind::Document | MarkupKind::Line)
                {
                    self.tree.close_current(false);
                }
                self.tree.literal(token.kind, token.span);
            }
        }
    }

    /// Close every open node; headings and lines end complete, unfinished
    /// emphasis does not.
    fn close_to_document(&mut self) {
        loop {
            let kind = self.tree.current_node().kind;
            if kind == MarkupKind::Document {
                break;
            }
            let complete = matches!(kind, MarkupKind::Heading | MarkupKind::Line);
            self.tree.close_current(complete);
        }
    }
}

/// Parse a token stream into a tree.
pub fn parse(tokens: &[Token]) -> ParseTree {
    Parser::new(tokens).parse()
}
