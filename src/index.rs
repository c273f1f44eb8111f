//! Owned word list + trie, and a lock-guarded variant for shared readers.

use parking_lot::{RwLock, RwLockReadGuard};

use crate::error::TrieError;
use crate::trie::{Placement, Trie};
use crate::words::WordList;
use crate::Config;

/// A word list together with the trie built over it.
///
/// Owning both means ranges can never outlive the text they point into, and
/// words can be appended after construction.
#[derive(Clone, Debug)]
pub struct Index {
    words: WordList,
    trie: Trie,
    config: Config,
}

impl Index {
    /// Validate `words` and build the trie over them in order.
    pub fn new<I, S>(words: I, config: Config) -> Result<Self, TrieError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = WordList::from_words(words, config.alphabet)?;
        Self::from_list(words, config)
    }

    pub fn from_list(words: WordList, config: Config) -> Result<Self, TrieError> {
        let trie = Trie::build(&words, &config)?.unwrap_or_default();
        Ok(Self {
            words,
            trie,
            config,
        })
    }

    /// Append `word` to the list and insert it.
    ///
    /// On error neither the list nor the trie changes.
    pub fn push(&mut self, word: &str) -> Result<Placement, TrieError> {
        let id = self.words.push(word)?;
        match self.trie.insert(&self.words, id, &self.config) {
            Ok(placement) => Ok(placement),
            Err(err) => {
                self.words.pop();
                Err(err)
            }
        }
    }

    /// Stored words starting with `prefix`.
    ///
    /// Fails with [`TrieError::EmptyInput`] when the index holds no words, and
    /// with [`TrieError::PrefixNotFound`] when nothing matches.
    pub fn complete(&self, prefix: &str) -> Result<Vec<&str>, TrieError> {
        if self.trie.is_empty() {
            return Err(TrieError::EmptyInput);
        }
        self.trie
            .complete_words(&self.words, prefix)
            .ok_or_else(|| TrieError::PrefixNotFound {
                prefix: prefix.to_string(),
            })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.trie.contains(&self.words, word)
    }

    pub fn dump(&self) -> String {
        self.trie.dump(&self.words)
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}

/// [`Index`] behind a reader-writer lock: one writer appends words while any
/// number of readers query.
#[derive(Debug)]
pub struct SharedIndex {
    inner: RwLock<Index>,
}

impl SharedIndex {
    pub fn new(index: Index) -> Self {
        Self {
            inner: RwLock::new(index),
        }
    }

    pub fn push(&self, word: &str) -> Result<Placement, TrieError> {
        self.inner.write().push(word)
    }

    /// Owned copy of the completions, taken under the read lock.
    pub fn complete(&self, prefix: &str) -> Result<Vec<String>, TrieError> {
        let inner = self.inner.read();
        let found = inner.complete(prefix)?;
        Ok(found.into_iter().map(str::to_string).collect())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.inner.read().contains(word)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Hold the read lock for several borrowing queries.
    pub fn read(&self) -> RwLockReadGuard<'_, Index> {
        self.inner.read()
    }

    pub fn into_inner(self) -> Index {
        self.inner.into_inner()
    }
}

impl From<Index> for SharedIndex {
    fn from(index: Index) -> Self {
        Self::new(index)
    }
}
