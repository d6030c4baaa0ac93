//! Runtime configuration
//!
//! Gathered from the command line in `main.rs`.

use crate::core::Word;
use crate::wordlists::loader::{WordSource, load_or_empty};
use crate::wordlists::{DICTIONARY, DailySchedule, Dictionary, Puzzle, TARGET_WORDS};
use chrono::NaiveDate;
use tracing::{debug, warn};

/// Where the word lists come from and which puzzle to play
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub dictionary: WordSource,
    pub targets: WordSource,
    pub epoch: NaiveDate,
    pub practice: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dictionary: WordSource::Embedded,
            targets: WordSource::Embedded,
            epoch: DailySchedule::default().epoch(),
            practice: false,
        }
    }
}

/// Word lists loaded for a run
#[derive(Debug, Clone, Default)]
pub struct WordLists {
    pub dictionary: Dictionary,
    pub targets: Vec<Word>,
}

impl GameConfig {
    #[must_use]
    pub const fn schedule(&self) -> DailySchedule {
        DailySchedule::new(self.epoch)
    }

    /// Load both word lists
    ///
    /// A list that fails to load is logged and left empty.
    #[must_use]
    pub fn load_word_lists(&self) -> WordLists {
        let dictionary = load_or_empty(&self.dictionary, DICTIONARY, "dictionary");
        let targets = load_or_empty(&self.targets, TARGET_WORDS, "targets");

        WordLists {
            dictionary: Dictionary::new(dictionary),
            targets,
        }
    }

    /// Pick the puzzle to play from the loaded targets
    #[must_use]
    pub fn puzzle(&self, targets: &[Word]) -> Option<Puzzle> {
        let puzzle = if self.practice {
            Puzzle::random(targets)
        } else {
            self.schedule().today(targets)
        };

        match &puzzle {
            Some(p) => debug!(title = %p.title(), "puzzle selected"),
            None => warn!("no puzzle available, guesses will be rejected"),
        }
        puzzle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn default_config_uses_embedded_lists() {
        let config = GameConfig::default();
        let lists = config.load_word_lists();

        assert_eq!(lists.targets.len(), TARGET_WORDS.len());
        assert_eq!(lists.dictionary.len(), DICTIONARY.len());
        assert!(config.puzzle(&lists.targets).is_some_and(|p| p.is_daily()));
    }

    #[test]
    fn missing_files_degrade_to_empty_lists() {
        let config = GameConfig {
            dictionary: WordSource::File(PathBuf::from("/no/such/dictionary.json")),
            targets: WordSource::File(PathBuf::from("/no/such/targets.json")),
            ..GameConfig::default()
        };
        let lists = config.load_word_lists();

        assert!(!lists.dictionary.is_loaded());
        assert!(lists.targets.is_empty());
        assert!(config.puzzle(&lists.targets).is_none());
    }

    #[test]
    fn practice_picks_from_targets() {
        let config = GameConfig {
            practice: true,
            ..GameConfig::default()
        };
        let lists = config.load_word_lists();
        let puzzle = config.puzzle(&lists.targets).unwrap();

        assert!(!puzzle.is_daily());
        assert!(lists.targets.contains(puzzle.word()));
    }
}
