//! Word lists for the daily game
//!
//! Provides embedded word lists compiled into the binary, file loading,
//! the guess dictionary, and the daily target schedule.

pub mod daily;
mod dictionary;
mod embedded;
pub mod loader;

pub use daily::{DailySchedule, Puzzle};
pub use dictionary::Dictionary;
pub use embedded::{DICTIONARY, DICTIONARY_COUNT, TARGET_WORDS, TARGET_WORDS_COUNT};
