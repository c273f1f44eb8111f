//! # range-trie
//!
//! A compressed prefix (PATRICIA-style) trie built over an existing word list.
//!
//! Nodes never hold text. Each edge is a [`WordRange`]: a word id plus an
//! inclusive start/end offset into that word. The tree is a first-child /
//! next-sibling structure kept in an index-addressed arena, and it supports
//! two things: inserting words one at a time in list order, splitting edges
//! as needed, and prefix completion.
//!
//! ## Example
//!
//! ```rust
//! use range_trie::{Alphabet, Config, Trie, WordList};
//!
//! let words = WordList::from_words(["bear", "bull", "stock", "bell"], Alphabet::Lowercase)?;
//! let trie = Trie::build(&words, &Config::default())?.expect("non-empty list");
//!
//! let mut found = trie.complete_words(&words, "be").unwrap();
//! found.sort();
//! assert_eq!(found, ["bear", "bell"]);
//! assert!(trie.complete(&words, "xyz").is_none());
//! # Ok::<(), range_trie::TrieError>(())
//! ```
//!
//! The word list must outlive the trie and must not change underneath it:
//! ranges are back-references, not copies. [`Index`] bundles the two when
//! owning both is more convenient.

pub mod complete;
pub mod debug;
pub mod error;
pub mod index;
pub mod node;
pub mod range;
pub mod trie;
pub mod words;

pub use complete::Completion;
pub use error::{ConfigError, InvalidWord, TrieError};
pub use index::{Index, SharedIndex};
pub use node::{Node, NodeId, Slot};
pub use range::{common_prefix_len, WordRange};
pub use trie::{Placement, Trie};
pub use words::{WordId, WordList};

use serde::{Deserialize, Serialize};

/// Characters a word may contain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alphabet {
    /// `a` to `z`.
    #[default]
    Lowercase,
    /// Printable ASCII without whitespace.
    Graphic,
}

impl Alphabet {
    #[inline]
    pub fn allows(self, ch: char) -> bool {
        match self {
            Alphabet::Lowercase => ch.is_ascii_lowercase(),
            Alphabet::Graphic => ch.is_ascii_graphic(),
        }
    }
}

/// What to do when a word equal to a stored word is inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Keep the first occurrence; later ones resolve to its node.
    #[default]
    Ignore,
    /// Fail with [`TrieError::DuplicateWord`].
    Reject,
}

/// Configuration for building a trie.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Characters accepted when validating words.
    pub alphabet: Alphabet,
    /// Handling of exact duplicate words.
    pub duplicates: DuplicatePolicy,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&content)?)
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}


#[cfg(test)]
mod proptests;
