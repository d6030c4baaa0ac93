//! Best-known outcome per keyboard letter

use crate::core::{LetterOutcome, Score, Word};
use rustc_hash::FxHashMap;

/// Aggregated key colors
///
/// A key only ever moves up: `Wrong` → `WrongLocation` → `Correct`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    keys: FxHashMap<u8, LetterOutcome>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one letter's outcome, keeping the better of old and new
    pub fn record(&mut self, letter: u8, outcome: LetterOutcome) {
        self.keys
            .entry(letter.to_ascii_lowercase())
            .and_modify(|known| *known = known.best(outcome))
            .or_insert(outcome);
    }

    /// Record every position of a scored guess
    pub fn record_guess(&mut self, guess: &Word, score: &Score) {
        for (&letter, &outcome) in guess.chars().iter().zip(score.outcomes()) {
            self.record(letter, outcome);
        }
    }

    /// Known outcome for a key, `None` if never guessed
    #[must_use]
    pub fn outcome(&self, letter: char) -> Option<LetterOutcome> {
        u8::try_from(letter.to_ascii_lowercase())
            .ok()
            .and_then(|byte| self.keys.get(&byte).copied())
    }
}
