//! The parse tree: an arena of nodes plus the parser's "current node".

use crate::span::Span;
use crate::syntax_kind::MarkupKind;
use crate::tree::{NodeId, Tree};

/// A node of the parse tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNode {
    pub kind: MarkupKind,
    /// Literal text; non-empty only for PlainText leaves.
    pub text: Span,
    /// Delimiter that opened this node (markup nodes only).
    pub open: Span,
    /// Delimiter that closed this node, empty unless a token closed it.
    pub close: Span,
    /// Whether the markup was properly closed.
    pub complete: bool,
    /// Opened by a delimiter with word characters on both sides.
    pub inside_word: bool,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
}

/// Parse tree built in one forward pass.
///
/// Nodes are never removed: closing a node only moves the current pointer to
/// its parent. The Document root is complete from the start.
#[derive(Debug, Clone)]
pub struct ParseTree {
    nodes: Vec<ParseNode>,
    current: NodeId,
}

const ROOT: NodeId = NodeId::new(0);

impl ParseTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![ParseNode {
                kind: MarkupKind::Document,
                text: Span::default(),
                open: Span::default(),
                close: Span::default(),
                complete: true,
                inside_word: false,
                children: Vec::new(),
                parent: None,
            }],
            current: ROOT,
        }
    }

    pub fn node(&self, id: NodeId) -> &ParseNode {
        &self.nodes[id.index()]
    }

    /// The node new children are attached to.
    pub fn current(&self) -> NodeId {
        self.current
    }

    pub fn current_node(&self) -> &ParseNode {
        self.node(self.current)
    }

    /// Number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Opens a markup node under the current node and makes it current.
    pub fn open(&mut self, kind: MarkupKind, open: Span, inside_word: bool) -> NodeId {
        let id = self.push(ParseNode {
            kind,
            text: Span::empty(open.start),
            open,
            close: Span::empty(open.end),
            complete: false,
            inside_word,
            children: Vec::new(),
            parent: Some(self.current),
        });
        self.current = id;
        id
    }

    /// Appends a completed PlainText leaf to the current node.
    pub fn append_text(&mut self, text: Span) -> NodeId {
        self.push(ParseNode {
            kind: MarkupKind::PlainText,
            text,
            open: Span::empty(text.start),
            close: Span::empty(text.end),
            complete: true,
            inside_word: false,
            children: Vec::new(),
            parent: Some(self.current),
        })
    }

    /// Opens and immediately closes an incomplete node: the delimiter stays
    /// literal text.
    pub fn literal(&mut self, kind: MarkupKind, open: Span) -> NodeId {
        let id = self.open(kind, open, false);
        self.close_current(false);
        id
    }

    /// Closes the current node and moves to its parent.
    ///
    /// # Panics
    ///
    /// Panics when the current node is the Document root.
    pub fn close_current(&mut self, complete: bool) {
        assert_ne!(self.current, ROOT, "cannot close the document root");
        let node = &mut self.nodes[self.current.index()];
        node.complete = complete;
        self.current = node.parent.unwrap_or(ROOT);
    }

    /// Closes the current node as complete, ended by the `close` delimiter.
    pub fn close_current_with(&mut self, close: Span) {
        self.nodes[self.current.index()].close = close;
        self.close_current(true);
    }

    fn push(&mut self, node: ParseNode) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes[self.current.index()].children.push(id);
        self.nodes.push(node);
        id
    }
}

impl Default for ParseTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree for ParseTree {
    fn root(&self) -> NodeId {
        ROOT
    }

    fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].children
    }
}
