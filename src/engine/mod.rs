//! Guess engine
//!
//! Turns typed letters into validated guesses, scores them against the
//! target, and tracks the board, keyboard, and game state. The engine does
//! no I/O and never blocks; front ends read its state to draw.

mod board;
mod buffer;
mod game;
mod input;
mod keyboard;
mod notice;

pub use board::{Board, MAX_ROWS, Tile, TileState};
pub use buffer::GuessBuffer;
pub use game::{Evaluation, Game, GameEvent, GameOutcome, GameState, check_outcome};
pub use input::Command;
pub use keyboard::KeyboardState;
pub use notice::{NOTICE_DURATION, Notice, NoticeKind, Rejection};
