//! Daily Wordle
//!
//! A five-letter word guessing game: one target word per day, six tries,
//! letter-by-letter feedback. The engine is pure and synchronous; the
//! terminal front ends only draw what it reports.
//!
//! # Quick Start
//!
//! ```rust
//! use daily_wordle::core::Word;
//! use daily_wordle::engine::{Command, Game, GameEvent, GameState};
//! use daily_wordle::wordlists::{Dictionary, Puzzle};
//!
//! let dictionary: Dictionary = ["crane", "slate"]
//!     .into_iter()
//!     .filter_map(|w| Word::new(w).ok())
//!     .collect();
//! let puzzle = Puzzle::Practice(Word::new("crane").unwrap());
//! let mut game = Game::new(&dictionary, Some(puzzle));
//!
//! for ch in "crane".chars() {
//!     game.apply(Command::Letter(ch));
//! }
//! assert!(matches!(game.apply(Command::Submit), GameEvent::Revealed(_)));
//! assert_eq!(game.state(), GameState::Won);
//! ```

// Core domain types
pub mod core;

// Guess engine and session state
pub mod engine;

// Word lists and daily schedule
pub mod wordlists;

// Runtime configuration
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
