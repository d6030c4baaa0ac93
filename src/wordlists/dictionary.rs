//! Accepted-guess dictionary

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Set of words accepted as guesses
///
/// Membership only. An empty dictionary stands for "not loaded yet" and
/// accepts nothing.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<Word>,
}

impl Dictionary {
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Dictionary with nothing in it
    #[must_use]
    pub fn unloaded() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Membership test on raw text, case-insensitive
    #[must_use]
    pub fn contains_str(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.contains(&word))
    }

    #[inline]
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        !self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<Word> for Dictionary {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter)
    }
}
