//! Formatting utilities for terminal output

use crate::core::LetterOutcome;
use crate::engine::{Command, KeyboardState, Tile, TileState};
use colored::{ColoredString, Colorize};

/// On-screen keyboard rows, top to bottom
///
/// `ENTER` and `REMOVE` are the virtual submit and delete keys.
pub const KEYBOARD_ROWS: [&[&str]; 3] = [
    &["Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P"],
    &["A", "S", "D", "F", "G", "H", "J", "K", "L"],
    &["ENTER", "Z", "X", "C", "V", "B", "N", "M", "REMOVE"],
];

/// Color a label by outcome, `None` meaning not guessed yet
#[must_use]
pub fn paint(label: &str, outcome: Option<LetterOutcome>) -> ColoredString {
    match outcome {
        Some(LetterOutcome::Correct) => label.black().on_green().bold(),
        Some(LetterOutcome::WrongLocation) => label.black().on_yellow().bold(),
        Some(LetterOutcome::Wrong) => label.white().on_bright_black(),
        None => label.normal(),
    }
}

/// Render one tile as a padded, colored cell
#[must_use]
pub fn format_tile(tile: Tile) -> ColoredString {
    let letter = tile.letter.map_or(' ', |ch| ch.to_ascii_uppercase());
    let cell = format!(" {letter} ");
    match tile.state {
        TileState::Revealed(outcome) => paint(&cell, Some(outcome)),
        TileState::Active => cell.bold(),
        TileState::Empty => cell.bright_black(),
    }
}

/// Render a row of tiles
#[must_use]
pub fn format_row(tiles: &[Tile]) -> String {
    tiles.iter().map(|&tile| format_tile(tile).to_string()).collect()
}

/// Render the keyboard with the best-known color per key
#[must_use]
pub fn format_keyboard(keyboard: &KeyboardState) -> String {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.iter()
                .map(|&key| {
                    let outcome = key_outcome(keyboard, key);
                    paint(&format!(" {key} "), outcome).to_string()
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Outcome shown on a keyboard key; special keys never light up
#[must_use]
pub fn key_outcome(keyboard: &KeyboardState, key: &str) -> Option<LetterOutcome> {
    match Command::from_virtual_key(key)? {
        Command::Letter(letter) => keyboard.outcome(letter),
        Command::Remove | Command::Submit => None,
    }
}
