//! The abstract syntax tree the rules rewrite and the renderer serializes.
//!
//! Built from a finished [`ParseTree`]. Complete markup becomes a container
//! node; everything else, including the delimiters of incomplete markup,
//! becomes PlainText leaves. After construction the only edit is
//! [`Ast::demote`], used by the syntax rules.

use marklet_syntax::{MarkupKind, NodeId, ParseTree, Span, Tree, Visit};

/// A node of the AST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstNode {
    pub kind: MarkupKind,
    /// Literal text; meaningful for PlainText nodes.
    pub text: Span,
    pub open: Span,
    pub close: Span,
    pub inside_word: bool,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
}

impl AstNode {
    fn leaf(text: Span, parent: NodeId) -> Self {
        Self {
            kind: MarkupKind::PlainText,
            text,
            open: Span::empty(text.start),
            close: Span::empty(text.end),
            inside_word: false,
            children: Vec::new(),
            parent: Some(parent),
        }
    }
}

/// Arena AST over a borrowed source string.
#[derive(Debug, Clone)]
pub struct Ast<'src> {
    source: &'src str,
    nodes: Vec<AstNode>,
}

const ROOT: NodeId = NodeId::new(0);

impl<'src> Ast<'src> {
    /// A tree holding only the Document root.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            nodes: vec![AstNode {
                kind: MarkupKind::Document,
                text: Span::empty(0),
                open: Span::empty(0),
                close: Span::empty(0),
                inside_word: false,
                children: Vec::new(),
                parent: None,
            }],
        }
    }

    /// Builds the AST in one walk over `tree`, which must have been parsed
    /// from `source`.
    pub fn from_parse_tree(source: &'src str, tree: &ParseTree) -> Self {
        let mut ast = Self::new(source);
        let mut scope = ROOT;
        // One entry per entered parse node: did it open an AST scope?
        let mut opened: Vec<bool> = Vec::new();

        for visit in tree.walk() {
            match visit {
                Visit::Enter(id) => {
                    let node = tree.node(id);
                    let opens_scope = match node.kind {
                        MarkupKind::Document => false,
                        MarkupKind::PlainText => {
                            ast.push(AstNode::leaf(node.text, scope));
                            false
                        }
                        kind if node.complete => {
                            scope = ast.push(AstNode {
                                kind,
                                text: Span::empty(node.open.start),
                                open: node.open,
                                close: node.close,
                                inside_word: node.inside_word,
                                children: Vec::new(),
                                parent: Some(scope),
                            });
                            if kind == MarkupKind::Line && !node.open.is_empty() {
                                ast.push(AstNode::leaf(node.open, scope));
                            }
                            true
                        }
                        _ => {
                            ast.push(AstNode::leaf(node.open, scope));
                            false
                        }
                    };
                    opened.push(opens_scope);
                }
                Visit::Exit(_) => {
                    if opened.pop() == Some(true) {
                        scope = ast.nodes[scope.index()].parent.unwrap_or(ROOT);
                    }
                }
            }
        }

        log::debug!(
            "built AST with {} nodes from {} parse nodes",
            ast.len(),
            tree.len()
        );
        ast
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn node(&self, id: NodeId) -> &AstNode {
        &self.nodes[id.index()]
    }

    /// Number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// The literal text of a node.
    pub fn text(&self, id: NodeId) -> &'src str {
        self.node(id).text.text(self.source)
    }

    /// Returns true if any PlainText node below `id` has text matching
    /// `pred`. Only descendants are inspected, not `id` itself.
    pub fn any_descendant_text(&self, id: NodeId, mut pred: impl FnMut(&str) -> bool) -> bool {
        let mut stack: Vec<NodeId> = self.node(id).children.clone();
        while let Some(next) = stack.pop() {
            let node = self.node(next);
            if node.kind == MarkupKind::PlainText && pred(node.text.text(self.source)) {
                return true;
            }
            stack.extend_from_slice(&node.children);
        }
        false
    }

    /// Rewrites `id` into a PlainText leaf holding its opening delimiter.
    ///
    /// Returns the nodes that must follow it in its parent's child list, in
    /// order: its former children, then a leaf for the closing delimiter when
    /// it had one. The returned nodes still need to be placed by the caller;
    /// their parent links already point at `id`'s parent.
    pub fn demote(&mut self, id: NodeId) -> Vec<NodeId> {
        let node = &mut self.nodes[id.index()];
        let parent = node.parent.unwrap_or(ROOT);
        let close = node.close;
        node.kind = MarkupKind::PlainText;
        node.text = node.open;
        node.inside_word = false;
        let mut spilled = std::mem::take(&mut node.children);

        for &child in &spilled {
            self.nodes[child.index()].parent = Some(parent);
        }
        if !close.is_empty() {
            let leaf = NodeId::new(self.nodes.len());
            self.nodes.push(AstNode::leaf(close, parent));
            spilled.push(leaf);
        }
        spilled
    }

    pub(crate) fn take_children(&mut self, id: NodeId) -> Vec<NodeId> {
        std::mem::take(&mut self.nodes[id.index()].children)
    }

    pub(crate) fn set_children(&mut self, id: NodeId, children: Vec<NodeId>) {
        self.nodes[id.index()].children = children;
    }

    fn push(&mut self, node: AstNode) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        if let Some(parent) = node.parent {
            self.nodes[parent.index()].children.push(id);
        }
        self.nodes.push(node);
        id
    }
}

impl Tree for Ast<'_> {
    fn root(&self) -> NodeId {
        ROOT
    }

    fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].children
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use insta::assert_snapshot;
    use marklet_syntax::{TokenizerConfig, parse_source};
    use pretty_assertions::assert_eq;

    pub(crate) fn build(source: &str) -> Ast<'_> {
        let tree = parse_source(source, &TokenizerConfig::default());
        Ast::from_parse_tree(source, &tree)
    }

    /// Indented dump: containers by kind, leaves by quoted text.
    pub(crate) fn format_ast(ast: &Ast) -> String {
        let mut result = String::new();
        let mut depth = 0;
        for visit in ast.walk() {
            match visit {
                Visit::Enter(id) => {
                    let node = ast.node(id);
                    let prefix = "  ".repeat(depth);
                    if node.kind == MarkupKind::PlainText {
                        result.push_str(&format!("{prefix}{:?}\n", ast.text(id)));
                    } else if node.inside_word {
                        result.push_str(&format!("{prefix}{} inside_word\n", node.kind));
                    } else {
                        result.push_str(&format!("{prefix}{}\n", node.kind));
                    }
                    depth += 1;
                }
                Visit::Exit(_) => depth -= 1,
            }
        }
        result
    }

    #[test]
    fn empty_source_has_one_line() {
        let ast = build("");
        assert_snapshot!(format_ast(&ast), @r"
        document
          line
        ");
    }

    #[test]
    fn complete_markup_becomes_containers() {
        let ast = build("# _a_ __b__");
        assert_snapshot!(format_ast(&ast), @r#"
        document
          line
            heading
              italic
                "a"
              " "
              bold
                "b"
        "#);
    }

    #[test]
    fn incomplete_markup_flattens_to_text() {
        let ast = build("x __y _z");
        assert_snapshot!(format_ast(&ast), @r#"
        document
          line
            "x "
            "__"
            "y "
            "_"
            "z"
        "#);
    }

    #[test]
    fn incomplete_inside_complete() {
        let ast = build("_a __b_");
        assert_snapshot!(format_ast(&ast), @r#"
        document
          line
            "_"
            "a "
            "__"
            "b"
            "_"
        "#);
    }

    #[test]
    fn newline_leads_its_line() {
        let ast = build("a\n_b_");
        assert_snapshot!(format_ast(&ast), @r#"
        document
          line
            "a"
          line
            "\n"
            italic
              "b"
        "#);
    }

    #[test]
    fn parent_links_match_children() {
        let ast = build("# x _y __z__ w_\n__v__ _u");
        for visit in ast.walk() {
            if let Visit::Enter(id) = visit {
                for &child in ast.children(id) {
                    assert_eq!(ast.node(child).parent, Some(id));
                }
            }
        }
    }

    #[test]
    fn demote_spills_children_and_closer() {
        let mut ast = build("a __b _c_ d__ e");
        let line = ast.children(ast.root())[0];
        let bold = ast.children(line)[1];
        assert_eq!(ast.node(bold).kind, MarkupKind::Bold);

        let spilled = ast.demote(bold);
        assert_eq!(ast.node(bold).kind, MarkupKind::PlainText);
        assert_eq!(ast.text(bold), "__");
        assert!(ast.children(bold).is_empty());

        let kinds: Vec<MarkupKind> = spilled.iter().map(|&id| ast.node(id).kind).collect();
        assert_eq!(
            kinds,
            vec![
                MarkupKind::PlainText,
                MarkupKind::Italic,
                MarkupKind::PlainText,
                MarkupKind::PlainText
            ]
        );
        assert_eq!(ast.text(spilled[3]), "__");
        for id in spilled {
            assert_eq!(ast.node(id).parent, Some(line));
        }
    }

    #[test]
    fn descendant_text_search() {
        let ast = build("_a __1__ b_ 2");
        let line = ast.children(ast.root())[0];
        let italic = ast.children(line)[0];
        assert!(ast.any_descendant_text(italic, |t| t.contains('1')));
        assert!(!ast.any_descendant_text(italic, |t| t.contains('2')));
    }
}
