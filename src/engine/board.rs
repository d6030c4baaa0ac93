//! Fixed 6×5 tile grid
//!
//! The board is what a front end draws. Rows fill top to bottom; the row
//! being typed holds `Active` tiles, scored rows hold `Revealed` tiles.

use crate::core::{LetterOutcome, Score, WORD_LENGTH, Word};

/// Number of guesses allowed per game
pub const MAX_ROWS: usize = 6;

/// Display state of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileState {
    #[default]
    Empty,
    Active,
    Revealed(LetterOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tile {
    pub letter: Option<char>,
    pub state: TileState,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    tiles: [[Tile; WORD_LENGTH]; MAX_ROWS],
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tile at a row and column
    ///
    /// # Panics
    /// Panics if row >= 6 or column >= 5
    #[must_use]
    pub const fn tile(&self, row: usize, column: usize) -> Tile {
        self.tiles[row][column]
    }

    #[must_use]
    pub const fn row(&self, row: usize) -> &[Tile; WORD_LENGTH] {
        &self.tiles[row]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile; WORD_LENGTH]> {
        self.tiles.iter()
    }

    pub(crate) fn set_active(&mut self, row: usize, column: usize, letter: char) {
        self.tiles[row][column] = Tile {
            letter: Some(letter),
            state: TileState::Active,
        };
    }

    pub(crate) fn clear_tile(&mut self, row: usize, column: usize) {
        self.tiles[row][column] = Tile::default();
    }

    pub(crate) fn reveal(&mut self, row: usize, guess: &Word, score: &Score) {
        for (column, tile) in self.tiles[row].iter_mut().enumerate() {
            *tile = Tile {
                letter: Some(char::from(guess.char_at(column))),
                state: TileState::Revealed(score.outcome_at(column)),
            };
        }
    }

    /// Tiles without a letter
    #[must_use]
    pub fn remaining_tiles(&self) -> usize {
        self.tiles
            .iter()
            .flatten()
            .filter(|tile| tile.letter.is_none())
            .count()
    }
}
