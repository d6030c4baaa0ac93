//! Per-letter feedback for a scored guess
//!
//! Scoring classifies each position independently:
//! - Correct: same letter at the same position in the target
//! - `WrongLocation`: letter appears somewhere else in the target
//! - Wrong: letter does not appear in the target
//!
//! Repeated letters are not counted against the target's letter frequencies.
//! Guessing "sassy" against "loses" lights up all three `s` tiles even though
//! the target only has two.

use super::{WORD_LENGTH, Word};

/// Classification of one guessed letter
///
/// Ordered so that `Correct > WrongLocation > Wrong`, which is the order
/// keyboard keys upgrade in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterOutcome {
    Wrong,
    WrongLocation,
    Correct,
}

impl LetterOutcome {
    /// Emoji square for share text
    #[must_use]
    pub const fn as_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::WrongLocation => '🟨',
            Self::Wrong => '⬜',
        }
    }

    /// Keep whichever of the two outcomes is better
    #[inline]
    #[must_use]
    pub fn best(self, other: Self) -> Self {
        self.max(other)
    }
}

/// Outcomes for all five positions of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score([LetterOutcome; WORD_LENGTH]);

impl Score {
    /// All positions correct
    pub const PERFECT: Self = Self([LetterOutcome::Correct; WORD_LENGTH]);

    /// Score `guess` against `target`
    ///
    /// # Examples
    /// ```
    /// use daily_wordle::core::{LetterOutcome, Score, Word};
    ///
    /// let guess = Word::new("sassy").unwrap();
    /// let target = Word::new("loses").unwrap();
    /// let score = Score::calculate(&guess, &target);
    ///
    /// assert_eq!(score.outcome_at(0), LetterOutcome::WrongLocation);
    /// assert_eq!(score.outcome_at(1), LetterOutcome::Wrong);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut outcomes = [LetterOutcome::Wrong; WORD_LENGTH];

        for (i, outcome) in outcomes.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            *outcome = if letter == target.char_at(i) {
                LetterOutcome::Correct
            } else if target.has_letter(letter) {
                LetterOutcome::WrongLocation
            } else {
                LetterOutcome::Wrong
            };
        }

        Self(outcomes)
    }

    /// Outcome at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn outcome_at(&self, position: usize) -> LetterOutcome {
        self.0[position]
    }

    #[inline]
    #[must_use]
    pub const fn outcomes(&self) -> &[LetterOutcome; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count positions with the given outcome
    #[must_use]
    pub fn count(&self, outcome: LetterOutcome) -> usize {
        self.0.iter().filter(|&&o| o == outcome).count()
    }

    /// Render as a row of emoji squares, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|o| o.as_emoji()).collect()
    }
}
