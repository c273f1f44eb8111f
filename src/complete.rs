//! Prefix completion and path reconstruction.

use smallvec::{smallvec, SmallVec};

use crate::node::NodeId;
use crate::range::common_prefix_len;
use crate::trie::Trie;
use crate::words::{WordId, WordList};

/// One stored word matched by a completion query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Completion {
    /// Terminal node of the word.
    pub node: NodeId,
    pub word: WordId,
}

/// Node at which a query string runs out.
struct Anchor {
    node: NodeId,
    /// Bytes of `node`'s fragment covered by the query.
    covered: usize,
}

impl Trie {
    /// Every stored word that starts with `prefix`, in no particular order.
    ///
    /// Returns `None` when no word matches. The empty prefix matches every
    /// stored word. Exact duplicates are reported once, under the id that
    /// was inserted first.
    ///
    /// # Panics
    ///
    /// Panics if `words` is not the list the trie was built over and a range
    /// points past its end.
    pub fn complete(&self, words: &WordList, prefix: &str) -> Option<Vec<Completion>> {
        let anchor = self.anchor(words, prefix.as_bytes())?;
        let found = self.terminals_under(anchor.node);
        if found.is_empty() {
            None
        } else {
            Some(found)
        }
    }

    /// Like [`Trie::complete`], resolved to text.
    pub fn complete_words<'w>(&self, words: &'w WordList, prefix: &str) -> Option<Vec<&'w str>> {
        let found = self.complete(words, prefix)?;
        Some(found.iter().filter_map(|c| words.get(c.word)).collect())
    }

    /// Terminal node of `word`, if it was inserted.
    ///
    /// # Panics
    ///
    /// Panics if `words` is not the list the trie was built over and a range
    /// points past its end.
    pub fn find(&self, words: &WordList, word: &str) -> Option<NodeId> {
        if word.is_empty() {
            return None;
        }
        let anchor = self.anchor(words, word.as_bytes())?;
        let node = self.nodes.get(anchor.node);
        let exact = anchor.covered == self.range(anchor.node).len();
        (exact && node.terminal.is_some()).then_some(anchor.node)
    }

    pub fn contains(&self, words: &WordList, word: &str) -> bool {
        self.find(words, word).is_some()
    }

    /// Walk down while the query still has bytes left.
    fn anchor(&self, words: &WordList, mut rest: &[u8]) -> Option<Anchor> {
        if rest.is_empty() {
            return Some(Anchor {
                node: NodeId::ROOT,
                covered: 0,
            });
        }

        let mut level = self.root().first_child;
        loop {
            // Siblings never share a first byte, so at most one can match.
            let (id, fragment) = self
                .nodes
                .siblings(level)
                .map(|id| (id, self.range(id).resolve(words)))
                .find(|(_, fragment)| fragment.first() == rest.first())?;

            let common = common_prefix_len(fragment, rest);
            if common == rest.len() {
                return Some(Anchor {
                    node: id,
                    covered: common,
                });
            }
            if common < fragment.len() {
                return None;
            }
            rest = &rest[common..];
            level = self.nodes.get(id).first_child;
        }
    }

    /// Every terminal node in the subtree rooted at `top`, `top` included.
    fn terminals_under(&self, top: NodeId) -> Vec<Completion> {
        let mut found = Vec::new();
        let mut stack: SmallVec<[NodeId; 32]> = smallvec![top];
        while let Some(id) = stack.pop() {
            if let Some(word) = self.nodes.get(id).terminal {
                found.push(Completion { node: id, word });
            }
            stack.extend(self.nodes.children(id));
        }
        found
    }

    /// Nodes from the top level down to `target`, both ends included.
    ///
    /// The path is recovered by following the text `target`'s range is
    /// anchored to, so this takes `O(depth)` steps.
    ///
    /// # Panics
    ///
    /// Panics if `words` is not the list the trie was built over and a range
    /// points past its end.
    pub fn path_to(&self, words: &WordList, target: NodeId) -> Option<Vec<NodeId>> {
        if target == NodeId::ROOT {
            return Some(Vec::new());
        }
        let range = self.node(target)?.range?;
        let mut rest = &words.bytes(range.word)[..range.depth()];

        let mut path = Vec::new();
        let mut level = self.root().first_child;
        loop {
            let id = self
                .nodes
                .siblings(level)
                .find(|&id| self.range(id).resolve(words).first() == rest.first())?;
            path.push(id);
            if id == target {
                return Some(path);
            }

            let len = self.range(id).len();
            if len >= rest.len() {
                return None;
            }
            rest = &rest[len..];
            level = self.nodes.get(id).first_child;
        }
    }

    /// Concatenate the fragments on the path to `node`.
    ///
    /// # Panics
    ///
    /// Panics if `words` is not the list the trie was built over and a range
    /// points past its end.
    pub fn spell(&self, words: &WordList, node: NodeId) -> Option<String> {
        let path = self.path_to(words, node)?;
        Some(
            path.into_iter()
                .map(|id| self.range(id).text(words))
                .collect(),
        )
    }
}
