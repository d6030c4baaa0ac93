//! Core domain types for the guessing game
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and have clear invariants.

mod outcome;
mod word;

pub use outcome::{LetterOutcome, Score};
pub use word::{WORD_LENGTH, Word, WordError};
