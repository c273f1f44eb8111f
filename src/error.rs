//! Error types.

use thiserror::Error;

use crate::words::WordId;

/// Why a word was refused at the [`WordList`](crate::WordList) boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidWord {
    /// Zero-length word.
    Empty,
    /// A byte outside the configured alphabet.
    ForbiddenChar {
        /// The offending character.
        ch: char,
        /// Byte offset of `ch` inside the word.
        at: usize,
    },
    /// Longer than a `u16` range can address.
    TooLong {
        /// Length of the word in bytes.
        len: usize,
    },
}

impl std::fmt::Display for InvalidWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidWord::Empty => write!(f, "the word is empty"),
            InvalidWord::ForbiddenChar { ch, at } => {
                write!(f, "forbidden character {ch:?} at offset {at}")
            }
            InvalidWord::TooLong { len } => {
                write!(f, "{len} bytes is longer than the {} byte limit", u16::MAX)
            }
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    #[error("word {index} is invalid: {reason}")]
    InvalidWord { index: usize, reason: InvalidWord },

    #[error("{count} words do not fit in a 32-bit word id")]
    TooManyWords { count: usize },

    #[error("word id {id} is not in the word list")]
    UnknownWord { id: WordId },

    #[error("word {id} duplicates word {first}")]
    DuplicateWord { id: WordId, first: WordId },

    #[error("the index holds no words")]
    EmptyInput,

    #[error("no word starts with {prefix:?}")]
    PrefixNotFound { prefix: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("reading config: {}", .0)]
    Io(#[from] std::io::Error),

    #[error("parsing config: {}", .0)]
    Parse(#[from] toml::de::Error),
}
