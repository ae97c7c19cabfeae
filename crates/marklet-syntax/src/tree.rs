//! Arena node handles and the Enter/Exit walk shared by every tree.
//!
//! Trees in this workspace are index arenas: a node's children are a list of
//! [`NodeId`]s and its parent is a plain index, so ownership runs strictly
//! top-down and no reference cycles exist. [`Walk`] flattens any such tree
//! into a document-order sequence of [`Visit`] events:
//!
//! ```text
//! Enter(Document)
//!   Enter(Line)
//!     Enter(Italic)
//!       Enter(PlainText) Exit(PlainText)
//!     Exit(Italic)
//!   Exit(Line)
//! Exit(Document)
//! ```
//!
//! The walk keeps an explicit stack, so arbitrarily deep trees never recurse.

/// Index of a node in its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

/// One step of a tree walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    Enter(NodeId),
    Exit(NodeId),
}

/// Read access to an ordered, rooted tree.
pub trait Tree {
    fn root(&self) -> NodeId;

    fn children(&self, id: NodeId) -> &[NodeId];

    /// Walks the whole tree in document order. Each call starts afresh.
    fn walk(&self) -> Walk<'_, Self>
    where
        Self: Sized,
    {
        Walk::new(self)
    }
}

/// Pre-order iterator emitting an `Enter` and a matching `Exit` per node.
pub struct Walk<'t, T> {
    tree: &'t T,
    /// Open nodes with the index of the next child to visit.
    stack: Vec<(NodeId, usize)>,
    started: bool,
}

impl<'t, T: Tree> Walk<'t, T> {
    pub fn new(tree: &'t T) -> Self {
        Self {
            tree,
            stack: Vec::new(),
            started: false,
        }
    }
}

impl<T: Tree> Iterator for Walk<'_, T> {
    type Item = Visit;

    fn next(&mut self) -> Option<Visit> {
        if !self.started {
            self.started = true;
            let root = self.tree.root();
            self.stack.push((root, 0));
            return Some(Visit::Enter(root));
        }

        let tree = self.tree;
        let top = self.stack.last_mut()?;
        let (id, next_child) = *top;
        match tree.children(id).get(next_child) {
            Some(&child) => {
                top.1 += 1;
                self.stack.push((child, 0));
                Some(Visit::Enter(child))
            }
            None => {
                self.stack.pop();
                Some(Visit::Exit(id))
            }
        }
    }
}
