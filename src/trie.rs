//! Trie construction.
//!
//! Words are inserted one at a time in word-list order. The walk keeps two
//! pieces of state: the [`Slot`] holding the node under inspection, and the
//! number of bytes of the new word already matched. Every insertion ends in
//! exactly one [`Placement`], which also names the link that was rewritten.

use tracing::{debug, trace};

use crate::error::TrieError;
use crate::node::{Node, NodeArena, NodeId, Slot};
use crate::range::{common_prefix_len, WordRange};
use crate::words::{WordId, WordList};
use crate::{Config, DuplicatePolicy};

/// Where an insertion put the new word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// A new leaf was hung on an empty link: the end of a sibling chain, or
    /// the empty child list of a fully matched node.
    Attached { node: NodeId, slot: Slot },
    /// An existing edge was cut in two. `prefix` replaced the old node in
    /// `slot`; the old node kept its arena slot as `continuation` (the
    /// unmatched tail). `leaf` holds the rest of the new word, or is `None`
    /// when the new word ends at the cut and `prefix` is its terminal.
    Split {
        prefix: NodeId,
        continuation: NodeId,
        leaf: Option<NodeId>,
        slot: Slot,
    },
    /// The word ends on an existing node boundary, which is now terminal.
    Marked { node: NodeId },
    /// The word was already stored as `first`.
    Duplicate { node: NodeId, first: WordId },
}

impl Placement {
    /// Terminal node for the inserted word.
    pub fn node(&self) -> NodeId {
        match *self {
            Placement::Attached { node, .. } => node,
            Placement::Split { prefix, leaf, .. } => leaf.unwrap_or(prefix),
            Placement::Marked { node } => node,
            Placement::Duplicate { node, .. } => node,
        }
    }
}

/// Compressed prefix trie over a [`WordList`].
///
/// Nodes store [`WordRange`]s, never text, so the word list the trie was built
/// from must be passed to every operation that reads fragments.
///
/// The trie is single-writer. Once construction is done it can be shared
/// between any number of readers.
#[derive(Clone, Debug)]
pub struct Trie {
    pub(crate) nodes: NodeArena,
    /// Terminal node per word id. Duplicates point at the first occurrence.
    pub(crate) terminals: Vec<Option<NodeId>>,
    pub(crate) count: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self {
            nodes: NodeArena::new(),
            terminals: Vec::new(),
            count: 0,
        }
    }

    /// Insert every word of `words` in id order.
    ///
    /// Returns `Ok(None)` for an empty list.
    pub fn build(words: &WordList, config: &Config) -> Result<Option<Self>, TrieError> {
        if words.is_empty() {
            debug!("empty word list, no trie built");
            return Ok(None);
        }

        let mut trie = Self::new();
        trie.terminals.reserve(words.len());
        for (id, _) in words.iter() {
            trie.insert(words, id, config)?;
        }
        debug!(
            words = words.len(),
            stored = trie.len(),
            nodes = trie.node_count(),
            "built trie"
        );
        Ok(Some(trie))
    }

    /// Insert one word of `words`.
    ///
    /// `words` must be the list every earlier insertion used, with `id`
    /// possibly appended since.
    ///
    /// # Panics
    ///
    /// Panics if `words` is a different list and a stored range points past
    /// its end.
    pub fn insert(
        &mut self,
        words: &WordList,
        id: WordId,
        config: &Config,
    ) -> Result<Placement, TrieError> {
        if !words.contains_id(id) {
            return Err(TrieError::UnknownWord { id });
        }
        let word = words.bytes(id);

        let mut depth = 0usize;
        let mut slot = Slot::FirstChild(NodeId::ROOT);
        let placement = loop {
            let Some(cur) = self.nodes.link(slot) else {
                let leaf = self.nodes.alloc(Node::leaf(WordRange::tail_of(words, id, depth)));
                self.nodes.set_link(slot, Some(leaf));
                break Placement::Attached { node: leaf, slot };
            };

            let range = self.range(cur);
            let common = common_prefix_len(range.resolve(words), &word[depth..]);
            trace!(word = %id, node = %cur, depth, common, "insert step");

            if common == 0 {
                slot = Slot::Sibling(cur);
            } else if common == range.len() {
                depth += common;
                if depth < word.len() {
                    slot = Slot::FirstChild(cur);
                    continue;
                }
                let terminal = self.nodes.get(cur).terminal;
                match terminal {
                    Some(first) => {
                        if config.duplicates == DuplicatePolicy::Reject {
                            return Err(TrieError::DuplicateWord { id, first });
                        }
                        break Placement::Duplicate { node: cur, first };
                    }
                    None => {
                        self.nodes.get_mut(cur).terminal = Some(id);
                        break Placement::Marked { node: cur };
                    }
                }
            } else {
                break self.split(words, id, slot, cur, depth, common);
            }
        };

        self.record(id, &placement);
        debug!(word = %id, ?placement, "inserted");
        Ok(placement)
    }

    /// Cut `cur` after `common` bytes; the new word diverges there or ends
    /// there.
    ///
    /// `cur` is not replaced: it is shortened in place and reused as the
    /// continuation, so its id stays valid. Only the prefix (and the leaf, if
    /// any) are new nodes.
    fn split(
        &mut self,
        words: &WordList,
        id: WordId,
        slot: Slot,
        cur: NodeId,
        depth: usize,
        common: usize,
    ) -> Placement {
        let (head, tail) = self.range(cur).split(common);
        let matched = depth + common;

        // The old node becomes the continuation: same id, children and
        // terminal marker, shorter range.
        let old_sibling = {
            let node = self.nodes.get_mut(cur);
            node.range = Some(tail);
            node.next_sibling.take()
        };

        let mut prefix = Node::fragment(head);
        prefix.first_child = Some(cur);
        prefix.next_sibling = old_sibling;

        let leaf = if matched < words.bytes(id).len() {
            let leaf = self.nodes.alloc(Node::leaf(WordRange::tail_of(words, id, matched)));
            self.nodes.get_mut(cur).next_sibling = Some(leaf);
            Some(leaf)
        } else {
            prefix.terminal = Some(id);
            None
        };

        let prefix = self.nodes.alloc(prefix);
        self.nodes.set_link(slot, Some(prefix));
        Placement::Split {
            prefix,
            continuation: cur,
            leaf,
            slot,
        }
    }

    fn record(&mut self, id: WordId, placement: &Placement) {
        if self.terminals.len() <= id.index() {
            self.terminals.resize(id.index() + 1, None);
        }
        self.terminals[id.index()] = Some(placement.node());
        if !matches!(placement, Placement::Duplicate { .. }) {
            self.count += 1;
        }
    }

    /// Range of a node reachable through a link.
    #[inline]
    pub(crate) fn range(&self, id: NodeId) -> WordRange {
        match self.nodes.get(id).range {
            Some(range) => range,
            None => unreachable!("the root is never linked as a child"),
        }
    }

    /// Terminal node of an inserted word.
    pub fn locate(&self, id: WordId) -> Option<NodeId> {
        self.terminals.get(id.index()).copied().flatten()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.try_get(id)
    }

    pub fn root(&self) -> &Node {
        self.nodes.get(NodeId::ROOT)
    }

    /// Nodes reachable from the root at the top level, in insertion order.
    pub fn top_level(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.children(NodeId::ROOT)
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.children(id)
    }

    /// Number of distinct words stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}
