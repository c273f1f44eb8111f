//! The append-only word list every trie range points into.
//!
//! Words are packed back to back into a single string; each word is addressed
//! by a `(offset, len)` span. A [`Trie`](crate::Trie) never copies text out of
//! the list, so the list has to be passed alongside the trie to every query.

use std::fmt;

use crate::error::{InvalidWord, TrieError};
use crate::Alphabet;

/// Index of a word in its [`WordList`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordId(pub(crate) u32);

impl WordId {
    pub fn new(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(Self)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated, append-only sequence of words.
#[derive(Clone, Debug, Default)]
pub struct WordList {
    data: String,
    spans: Vec<(u32, u16)>,
    alphabet: Alphabet,
}

impl WordList {
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            data: String::new(),
            spans: Vec::new(),
            alphabet,
        }
    }

    /// Validate and pack every word, failing on the first bad one.
    pub fn from_words<I, S>(words: I, alphabet: Alphabet) -> Result<Self, TrieError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new(alphabet);
        for word in words {
            list.push(word.as_ref())?;
        }
        Ok(list)
    }

    /// Split `text` on ASCII whitespace and pack the pieces in order.
    pub fn from_text(text: &str, alphabet: Alphabet) -> Result<Self, TrieError> {
        Self::from_words(text.split_ascii_whitespace(), alphabet)
    }

    /// Append one word, returning its id.
    pub fn push(&mut self, word: &str) -> Result<WordId, TrieError> {
        let index = self.spans.len();
        if let Err(reason) = validate(word, self.alphabet) {
            return Err(TrieError::InvalidWord { index, reason });
        }
        let id = WordId::new(index).ok_or(TrieError::TooManyWords { count: index + 1 })?;
        let offset = u32::try_from(self.data.len())
            .map_err(|_| TrieError::TooManyWords { count: index + 1 })?;

        // Validation bounds the length by u16::MAX.
        self.spans.push((offset, word.len() as u16));
        self.data.push_str(word);
        Ok(id)
    }

    /// Drop the most recently pushed word.
    pub(crate) fn pop(&mut self) {
        if let Some((offset, _)) = self.spans.pop() {
            self.data.truncate(offset as usize);
        }
    }

    pub fn get(&self, id: WordId) -> Option<&str> {
        let &(offset, len) = self.spans.get(id.index())?;
        let start = offset as usize;
        self.data.get(start..start + len as usize)
    }

    #[inline]
    pub(crate) fn bytes(&self, id: WordId) -> &[u8] {
        let (offset, len) = self.spans[id.index()];
        let start = offset as usize;
        &self.data.as_bytes()[start..start + len as usize]
    }

    pub fn contains_id(&self, id: WordId) -> bool {
        id.index() < self.spans.len()
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Words in id order.
    pub fn iter(&self) -> impl Iterator<Item = (WordId, &str)> + '_ {
        self.spans.iter().enumerate().map(|(i, &(offset, len))| {
            let start = offset as usize;
            (WordId(i as u32), &self.data[start..start + len as usize])
        })
    }
}

fn validate(word: &str, alphabet: Alphabet) -> Result<(), InvalidWord> {
    if word.is_empty() {
        return Err(InvalidWord::Empty);
    }
    if let Some((at, ch)) = word.char_indices().find(|&(_, ch)| !alphabet.allows(ch)) {
        return Err(InvalidWord::ForbiddenChar { ch, at });
    }
    if word.len() > u16::MAX as usize {
        return Err(InvalidWord::TooLong { len: word.len() });
    }
    Ok(())
}
