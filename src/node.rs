//! Node arena: first-child / next-sibling tree addressed by index.
//!
//! There are no parent links. Mutation goes through a [`Slot`], which names
//! the link (a parent's `first_child` or a predecessor's `next_sibling`) that
//! currently holds a node, so a split can rewrite exactly that link.

use std::fmt;

use crate::range::WordRange;
use crate::words::WordId;

/// Index of a node in its trie's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    /// `None` only for the root.
    pub(crate) range: Option<WordRange>,
    pub(crate) first_child: Option<NodeId>,
    pub(crate) next_sibling: Option<NodeId>,
    /// Word that ends exactly at the end of this node's fragment.
    pub(crate) terminal: Option<WordId>,
}

impl Node {
    fn root() -> Self {
        Self {
            range: None,
            first_child: None,
            next_sibling: None,
            terminal: None,
        }
    }

    pub(crate) fn fragment(range: WordRange) -> Self {
        Self {
            range: Some(range),
            first_child: None,
            next_sibling: None,
            terminal: None,
        }
    }

    pub(crate) fn leaf(range: WordRange) -> Self {
        Self {
            terminal: Some(range.word),
            ..Self::fragment(range)
        }
    }

    pub fn range(&self) -> Option<WordRange> {
        self.range
    }

    pub fn first_child(&self) -> Option<NodeId> {
        self.first_child
    }

    pub fn next_sibling(&self) -> Option<NodeId> {
        self.next_sibling
    }

    pub fn terminal(&self) -> Option<WordId> {
        self.terminal
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.first_child.is_none()
    }
}

/// A link that can hold a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// `first_child` of the given node.
    FirstChild(NodeId),
    /// `next_sibling` of the given node.
    Sibling(NodeId),
}

#[derive(Clone, Debug)]
pub(crate) struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![Node::root()],
        }
    }

    pub(crate) fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    pub(crate) fn try_get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub(crate) fn link(&self, slot: Slot) -> Option<NodeId> {
        match slot {
            Slot::FirstChild(parent) => self.get(parent).first_child,
            Slot::Sibling(prev) => self.get(prev).next_sibling,
        }
    }

    #[inline]
    pub(crate) fn set_link(&mut self, slot: Slot, target: Option<NodeId>) {
        match slot {
            Slot::FirstChild(parent) => self.get_mut(parent).first_child = target,
            Slot::Sibling(prev) => self.get_mut(prev).next_sibling = target,
        }
    }

    /// Iterate a sibling chain starting at `first`.
    pub(crate) fn siblings(&self, first: Option<NodeId>) -> Siblings<'_> {
        Siblings {
            arena: self,
            next: first,
        }
    }

    pub(crate) fn children(&self, parent: NodeId) -> Siblings<'_> {
        self.siblings(self.get(parent).first_child)
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}

pub(crate) struct Siblings<'a> {
    arena: &'a NodeArena,
    next: Option<NodeId>,
}

impl Iterator for Siblings<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.arena.get(id).next_sibling;
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: u16, end: u16) -> WordRange {
        WordRange::new(WordId(0), start, end)
    }

    #[test]
    fn test_root_is_first() {
        let arena = NodeArena::new();
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.get(NodeId::ROOT).range(), None);
        assert!(arena.get(NodeId::ROOT).is_leaf());
    }

    #[test]
    fn test_slots_rewrite_the_named_link() {
        let mut arena = NodeArena::new();
        let a = arena.alloc(Node::leaf(range(0, 0)));
        let b = arena.alloc(Node::leaf(range(0, 1)));
        let c = arena.alloc(Node::leaf(range(0, 2)));

        arena.set_link(Slot::FirstChild(NodeId::ROOT), Some(a));
        arena.set_link(Slot::Sibling(a), Some(b));
        assert_eq!(arena.link(Slot::FirstChild(NodeId::ROOT)), Some(a));
        assert_eq!(arena.children(NodeId::ROOT).collect::<Vec<_>>(), [a, b]);

        arena.set_link(Slot::Sibling(a), Some(c));
        assert_eq!(arena.children(NodeId::ROOT).collect::<Vec<_>>(), [a, c]);
        assert_eq!(arena.get(a).terminal(), Some(WordId(0)));
        assert!(arena.get(b).next_sibling().is_none());
    }
}
