//! Terminal output formatting
//!
//! Display utilities for the line-based game and one-shot commands.

pub mod display;
pub mod formatters;

pub use display::{write_board, write_game_over, write_keyboard, write_score_result, write_today};
