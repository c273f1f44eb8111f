//! Fragments described as ranges into the word list.

use std::fmt;

use crate::words::{WordId, WordList};

/// Inclusive byte range `start..=end` of word `word`.
///
/// Any word that carries the same text at the same depth could back a
/// fragment; the trie keeps whichever word first created the edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordRange {
    pub word: WordId,
    pub start: u16,
    pub end: u16,
}

impl WordRange {
    #[inline]
    pub fn new(word: WordId, start: u16, end: u16) -> Self {
        debug_assert!(start <= end, "fragments are never empty");
        Self { word, start, end }
    }

    /// Range covering `word[start..]`.
    pub(crate) fn tail_of(words: &WordList, word: WordId, start: usize) -> Self {
        let len = words.bytes(word).len();
        debug_assert!(start < len);
        Self::new(word, start as u16, (len - 1) as u16)
    }

    #[inline]
    pub fn len(self) -> usize {
        (self.end - self.start) as usize + 1
    }

    /// Number of bytes from the start of the word through `end`.
    #[inline]
    pub fn depth(self) -> usize {
        self.end as usize + 1
    }

    #[inline]
    pub fn resolve(self, words: &WordList) -> &[u8] {
        &words.bytes(self.word)[self.start as usize..=self.end as usize]
    }

    pub fn text(self, words: &WordList) -> &str {
        words
            .get(self.word)
            .and_then(|w| w.get(self.start as usize..=self.end as usize))
            .unwrap_or("")
    }

    /// Cut after the first `at` bytes. `at` must lie strictly inside the range.
    pub(crate) fn split(self, at: usize) -> (Self, Self) {
        debug_assert!(at > 0 && at < self.len());
        let mid = self.start + at as u16;
        (
            Self::new(self.word, self.start, mid - 1),
            Self::new(self.word, mid, self.end),
        )
    }
}

impl fmt::Display for WordRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}..={})", self.word, self.start, self.end)
    }
}

/// Length of the longest common prefix of `a` and `b`.
#[inline]
pub fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Alphabet;

    #[test]
    fn test_common_prefix_len() {
        assert_eq!(common_prefix_len(b"bear", b"bell"), 2);
        assert_eq!(common_prefix_len(b"bear", b"stock"), 0);
        assert_eq!(common_prefix_len(b"car", b"carpet"), 3);
        assert_eq!(common_prefix_len(b"", b"a"), 0);
        assert_eq!(common_prefix_len(b"same", b"same"), 4);
    }

    #[test]
    fn test_resolve_and_split() {
        let words = WordList::from_words(["bell"], Alphabet::Lowercase).unwrap();
        let range = WordRange::tail_of(&words, WordId(0), 1);
        assert_eq!(range, WordRange::new(WordId(0), 1, 3));
        assert_eq!(range.resolve(&words), b"ell");
        assert_eq!(range.len(), 3);
        assert_eq!(range.depth(), 4);

        let (head, tail) = range.split(1);
        assert_eq!(head.text(&words), "e");
        assert_eq!(tail.text(&words), "ll");
        assert_eq!(tail.start, head.end + 1);
        assert_eq!(format!("{tail}"), "(0, 2..=3)");
    }
}
