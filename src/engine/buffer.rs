//! In-progress guess row

use crate::core::{WORD_LENGTH, Word};
use crate::wordlists::Dictionary;
use super::Rejection;

/// Letters typed for the current row, 0 to 5 of them
///
/// Only ASCII letters are stored, always lowercase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessBuffer {
    letters: Vec<u8>,
}

impl GuessBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            letters: Vec::with_capacity(WORD_LENGTH),
        }
    }

    /// Append a letter
    ///
    /// Returns `false` without changing anything when the buffer is full or
    /// the character is not an ASCII letter.
    pub fn append(&mut self, letter: char) -> bool {
        if self.is_full() || !letter.is_ascii_alphabetic() {
            return false;
        }
        // ASCII-checked above, so the cast is lossless
        self.letters.push(letter.to_ascii_lowercase() as u8);
        true
    }

    /// Remove the most recent letter, returning it
    pub fn remove_last(&mut self) -> Option<char> {
        self.letters.pop().map(char::from)
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.letters.len() == WORD_LENGTH
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }

    /// Letter at a column, if typed
    #[must_use]
    pub fn letter_at(&self, column: usize) -> Option<char> {
        self.letters.get(column).copied().map(char::from)
    }

    /// The typed letters concatenated
    #[must_use]
    pub fn as_text(&self) -> String {
        self.letters.iter().copied().map(char::from).collect()
    }

    /// Check the buffer against the dictionary
    ///
    /// # Errors
    /// - `Rejection::TooShort` when fewer than 5 letters are typed
    /// - `Rejection::NotAWord` when the word is not in the dictionary
    pub fn validate(&self, dictionary: &Dictionary) -> Result<Word, Rejection> {
        if !self.is_full() {
            return Err(Rejection::TooShort);
        }

        Word::new(self.as_text())
            .ok()
            .filter(|word| dictionary.contains(word))
            .ok_or(Rejection::NotAWord)
    }
}
