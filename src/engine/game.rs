//! Game session and state machine
//!
//! ```text
//! AcceptingInput --submit ok--> Evaluating --resolve--> AcceptingInput (ongoing)
//!                                                  \--> Won  (terminal)
//!                                                   \-> Lost (terminal)
//! ```

use super::board::{Board, MAX_ROWS};
use super::buffer::GuessBuffer;
use super::input::Command;
use super::keyboard::KeyboardState;
use super::notice::{Notice, Rejection};
use crate::core::{Score, Word};
use crate::wordlists::{Dictionary, Puzzle};
use tracing::{debug, info, warn};

/// Lifecycle stage of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AcceptingInput,
    Evaluating,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Result of a resolved guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win,
    Loss,
    Ongoing,
}

/// Decide what a resolved guess means for the game
///
/// `guesses_so_far` includes `guess`.
///
/// # Examples
/// ```
/// use daily_wordle::core::Word;
/// use daily_wordle::engine::{GameOutcome, check_outcome};
///
/// let target = Word::new("crane").unwrap();
/// let miss = Word::new("slate").unwrap();
///
/// assert_eq!(check_outcome(&target, &target, 3, 6), GameOutcome::Win);
/// assert_eq!(check_outcome(&miss, &target, 3, 6), GameOutcome::Ongoing);
/// assert_eq!(check_outcome(&miss, &target, 6, 6), GameOutcome::Loss);
/// ```
#[must_use]
pub fn check_outcome(
    guess: &Word,
    target: &Word,
    guesses_so_far: usize,
    max_rows: usize,
) -> GameOutcome {
    if guess == target {
        GameOutcome::Win
    } else if guesses_so_far >= max_rows {
        GameOutcome::Loss
    } else {
        GameOutcome::Ongoing
    }
}

/// A scored row, in the order a front end should reveal it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub row: usize,
    pub guess: Word,
    pub score: Score,
    pub outcome: GameOutcome,
}

/// What applying a command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    LetterAdded {
        row: usize,
        column: usize,
        letter: char,
    },
    LetterRemoved {
        row: usize,
        column: usize,
    },
    Rejected(Rejection),
    Revealed(Evaluation),
    /// The command had no effect (full row, empty row, locked input)
    Ignored,
}

/// One play session against one target word
pub struct Game<'a> {
    dictionary: &'a Dictionary,
    puzzle: Option<Puzzle>,
    buffer: GuessBuffer,
    board: Board,
    keyboard: KeyboardState,
    state: GameState,
    guesses: Vec<(Word, Score)>,
    pending: Option<Word>,
}

impl<'a> Game<'a> {
    /// Start a session
    ///
    /// `puzzle` may be `None` while target words are unavailable; every
    /// submission is then rejected.
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, puzzle: Option<Puzzle>) -> Self {
        if !dictionary.is_loaded() {
            warn!("starting game with an empty dictionary, no guess will be accepted");
        }

        Self {
            dictionary,
            puzzle,
            buffer: GuessBuffer::new(),
            board: Board::new(),
            keyboard: KeyboardState::new(),
            state: GameState::AcceptingInput,
            guesses: Vec::with_capacity(MAX_ROWS),
            pending: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    #[must_use]
    pub const fn puzzle(&self) -> Option<&Puzzle> {
        self.puzzle.as_ref()
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn buffer(&self) -> &GuessBuffer {
        &self.buffer
    }

    /// Scored guesses so far
    #[must_use]
    pub fn guesses(&self) -> &[(Word, Score)] {
        &self.guesses
    }

    /// Index of the row being typed
    #[must_use]
    pub fn current_row(&self) -> usize {
        self.guesses.len()
    }

    /// The target, once the game is over
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        self.puzzle
            .as_ref()
            .filter(|_| self.is_over())
            .map(Puzzle::word)
    }

    /// Type a letter into the current row
    ///
    /// Returns `false` if nothing changed.
    pub fn add_letter(&mut self, letter: char) -> bool {
        if self.state != GameState::AcceptingInput {
            return false;
        }

        let column = self.buffer.len();
        if !self.buffer.append(letter) {
            return false;
        }
        if let Some(stored) = self.buffer.letter_at(column) {
            self.board.set_active(self.current_row(), column, stored);
        }
        true
    }

    /// Delete the last letter of the current row
    ///
    /// Returns `false` if nothing changed.
    pub fn remove_letter(&mut self) -> bool {
        if self.state != GameState::AcceptingInput || self.buffer.remove_last().is_none() {
            return false;
        }
        self.board.clear_tile(self.current_row(), self.buffer.len());
        true
    }

    /// Submit the current row
    ///
    /// On success the session enters `Evaluating` and refuses input until
    /// [`Game::resolve`] is called.
    ///
    /// # Errors
    /// - `Rejection::InputLocked` outside `AcceptingInput`
    /// - `Rejection::TooShort` when the row is incomplete
    /// - `Rejection::NotAWord` when the word is not in the dictionary, or
    ///   there is no target to score against
    pub fn submit(&mut self) -> Result<Word, Rejection> {
        if self.state != GameState::AcceptingInput {
            return Err(Rejection::InputLocked);
        }

        let word = self.buffer.validate(self.dictionary).inspect_err(|rejection| {
            debug!(guess = %self.buffer.as_text(), %rejection, "guess rejected");
        })?;

        if self.puzzle.is_none() {
            warn!(guess = %word, "no target word loaded, rejecting guess");
            return Err(Rejection::NotAWord);
        }

        debug!(guess = %word, row = self.current_row(), "guess accepted");
        self.state = GameState::Evaluating;
        self.pending = Some(word.clone());
        Ok(word)
    }

    /// Score the submitted row and advance the state machine
    ///
    /// Returns `None` unless the session is `Evaluating`.
    pub fn resolve(&mut self) -> Option<Evaluation> {
        if self.state != GameState::Evaluating {
            return None;
        }
        let guess = self.pending.take()?;
        let target = self.puzzle.as_ref()?.word();

        let row = self.current_row();
        let score = Score::calculate(&guess, target);
        self.board.reveal(row, &guess, &score);
        self.keyboard.record_guess(&guess, &score);
        self.guesses.push((guess.clone(), score));
        self.buffer.clear();

        let outcome = check_outcome(&guess, target, self.guesses.len(), MAX_ROWS);
        self.state = match outcome {
            GameOutcome::Win => GameState::Won,
            GameOutcome::Loss => GameState::Lost,
            GameOutcome::Ongoing => GameState::AcceptingInput,
        };

        if self.is_over() {
            info!(?outcome, guesses = self.guesses.len(), "game finished");
        }

        Some(Evaluation {
            row,
            guess,
            score,
            outcome,
        })
    }

    /// Apply one input command
    ///
    /// A successful submit is resolved immediately; reveal pacing is up to
    /// the caller.
    pub fn apply(&mut self, command: Command) -> GameEvent {
        let row = self.current_row();
        match command {
            Command::Letter(letter) => {
                let column = self.buffer.len();
                if self.add_letter(letter) {
                    GameEvent::LetterAdded {
                        row,
                        column,
                        letter: letter.to_ascii_lowercase(),
                    }
                } else {
                    GameEvent::Ignored
                }
            }
            Command::Remove => {
                if self.remove_letter() {
                    GameEvent::LetterRemoved {
                        row,
                        column: self.buffer.len(),
                    }
                } else {
                    GameEvent::Ignored
                }
            }
            Command::Submit => match self.submit() {
                Ok(_) => self
                    .resolve()
                    .map_or(GameEvent::Ignored, GameEvent::Revealed),
                Err(Rejection::InputLocked) => GameEvent::Ignored,
                Err(rejection) => GameEvent::Rejected(rejection),
            },
        }
    }

    /// Persistent notice for a finished game
    #[must_use]
    pub fn outcome_notice(&self) -> Option<Notice> {
        match self.state {
            GameState::Won => Some(Notice::win()),
            GameState::Lost => self.revealed_target().map(|word| Notice::reveal(word.text())),
            GameState::AcceptingInput | GameState::Evaluating => None,
        }
    }

    /// Spoiler-free summary of a finished game
    ///
    /// ```text
    /// Wordle 1750 4/6
    ///
    /// ⬜🟨⬜⬜🟩
    /// ...
    /// ```
    #[must_use]
    pub fn share_text(&self) -> Option<String> {
        if !self.is_over() {
            return None;
        }
        let title = self.puzzle.as_ref()?.title();
        let tries = if self.state == GameState::Won {
            self.guesses.len().to_string()
        } else {
            "X".to_string()
        };

        let rows: Vec<String> = self.guesses.iter().map(|(_, s)| s.to_emoji()).collect();
        Some(format!("{title} {tries}/{MAX_ROWS}\n\n{}", rows.join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterOutcome;
    use crate::engine::TileState;
    use crate::wordlists::loader::words_from_slice;
    use tracing_test::traced_test;

    const WORDS: &[&str] = &[
        "crane", "slate", "apple", "sassy", "loses", "eerie", "dealt", "pious", "mount", "chunk",
        "fizzy",
    ];

    fn dictionary() -> Dictionary {
        Dictionary::new(words_from_slice(WORDS))
    }

    fn daily(target: &str) -> Option<Puzzle> {
        Some(Puzzle::Daily {
            number: 7,
            word: Word::new(target).unwrap(),
        })
    }

    fn type_word(game: &mut Game, word: &str) {
        for ch in word.chars() {
            game.add_letter(ch);
        }
    }

    fn play(game: &mut Game, word: &str) -> Evaluation {
        type_word(game, word);
        game.submit().unwrap();
        game.resolve().unwrap()
    }

    #[test]
    fn starts_accepting_input() {
        let dictionary = dictionary();
        let game = Game::new(&dictionary, daily("crane"));

        assert_eq!(game.state(), GameState::AcceptingInput);
        assert_eq!(game.current_row(), 0);
        assert!(game.revealed_target().is_none());
        assert!(game.outcome_notice().is_none());
    }

    #[test]
    fn typing_fills_board_row() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, daily("crane"));

        type_word(&mut game, "CRa");
        assert_eq!(game.buffer().as_text(), "cra");
        assert_eq!(game.board().tile(0, 2).letter, Some('a'));
        assert_eq!(game.board().tile(0, 2).state, TileState::Active);

        assert!(game.remove_letter());
        assert_eq!(game.board().tile(0, 2).letter, None);
        assert_eq!(game.buffer().len(), 2);
    }

    #[test]
    fn too_short_keeps_buffer() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, daily("crane"));
        type_word(&mut game, "cat");

        assert_eq!(game.submit(), Err(Rejection::TooShort));
        assert_eq!(game.buffer().as_text(), "cat");
        assert_eq!(game.state(), GameState::AcceptingInput);
    }

    #[test]
    fn not_a_word_keeps_buffer() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, daily("crane"));
        type_word(&mut game, "zzzzz");

        assert_eq!(game.submit(), Err(Rejection::NotAWord));
        assert_eq!(game.buffer().as_text(), "zzzzz");

        // Still editable
        assert!(game.remove_letter());
        assert_eq!(game.buffer().len(), 4);
    }

    #[test]
    fn evaluating_locks_input() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, daily("crane"));
        type_word(&mut game, "slate");

        assert_eq!(game.submit().unwrap().text(), "slate");
        assert_eq!(game.state(), GameState::Evaluating);
        assert!(!game.add_letter('x'));
        assert!(!game.remove_letter());
        assert_eq!(game.submit(), Err(Rejection::InputLocked));

        let evaluation = game.resolve().unwrap();
        assert_eq!(evaluation.outcome, GameOutcome::Ongoing);
        assert_eq!(game.state(), GameState::AcceptingInput);
        assert!(game.buffer().is_empty());
        assert!(game.resolve().is_none());
    }

    #[test]
    fn scoring_matches_rule() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, daily("loses"));

        let evaluation = play(&mut game, "sassy");
        assert_eq!(
            evaluation.score.outcomes(),
            &[
                LetterOutcome::WrongLocation,
                LetterOutcome::Wrong,
                LetterOutcome::Correct,
                LetterOutcome::WrongLocation,
                LetterOutcome::Wrong,
            ]
        );
        assert_eq!(
            game.board().tile(0, 1).state,
            TileState::Revealed(LetterOutcome::Wrong)
        );
    }

    #[test]
    fn exact_guess_wins() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, daily("crane"));

        let evaluation = play(&mut game, "crane");
        assert!(evaluation.score.is_perfect());
        assert_eq!(evaluation.outcome, GameOutcome::Win);
        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.outcome_notice(), Some(Notice::win()));

        // Terminal: nothing more is accepted
        assert!(!game.add_letter('a'));
        assert_eq!(game.apply(Command::Submit), GameEvent::Ignored);
    }

    #[test]
    fn six_misses_lose_and_reveal() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, daily("crane"));

        for word in ["slate", "apple", "sassy", "loses", "eerie"] {
            assert_eq!(play(&mut game, word).outcome, GameOutcome::Ongoing);
        }
        let last = play(&mut game, "dealt");

        assert_eq!(last.outcome, GameOutcome::Loss);
        assert_eq!(last.row, 5);
        assert_eq!(game.state(), GameState::Lost);
        assert_eq!(game.board().remaining_tiles(), 0);
        assert_eq!(game.revealed_target().unwrap().text(), "crane");
        assert_eq!(game.outcome_notice().unwrap().text, "CRANE");
    }

    #[test]
    fn win_on_last_row_is_a_win() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, daily("crane"));

        for word in ["slate", "apple", "sassy", "loses", "eerie"] {
            play(&mut game, word);
        }
        assert_eq!(play(&mut game, "crane").outcome, GameOutcome::Win);
    }

    #[test]
    fn keyboard_never_downgrades_across_guesses() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, daily("slate"));

        play(&mut game, "crane");
        assert_eq!(game.keyboard().outcome('e'), Some(LetterOutcome::Correct));

        play(&mut game, "eerie");
        assert_eq!(game.keyboard().outcome('e'), Some(LetterOutcome::Correct));
        assert_eq!(game.keyboard().outcome('r'), Some(LetterOutcome::Wrong));
    }

    #[test]
    fn apply_emits_events() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, daily("crane"));

        assert_eq!(game.apply(Command::Remove), GameEvent::Ignored);
        assert_eq!(
            game.apply(Command::Letter('S')),
            GameEvent::LetterAdded {
                row: 0,
                column: 0,
                letter: 's'
            }
        );
        assert_eq!(
            game.apply(Command::Submit),
            GameEvent::Rejected(Rejection::TooShort)
        );
        assert_eq!(
            game.apply(Command::Remove),
            GameEvent::LetterRemoved { row: 0, column: 0 }
        );

        for ch in "slate".chars() {
            game.apply(Command::Letter(ch));
        }
        assert_eq!(game.apply(Command::Letter('x')), GameEvent::Ignored);

        let GameEvent::Revealed(evaluation) = game.apply(Command::Submit) else {
            panic!("expected a reveal");
        };
        assert_eq!(evaluation.row, 0);
        assert_eq!(evaluation.guess.text(), "slate");
        assert_eq!(game.current_row(), 1);
    }

    #[test]
    fn unloaded_dictionary_rejects_everything() {
        let dictionary = Dictionary::unloaded();
        let mut game = Game::new(&dictionary, daily("crane"));
        type_word(&mut game, "crane");

        assert_eq!(game.submit(), Err(Rejection::NotAWord));
        assert_eq!(game.state(), GameState::AcceptingInput);
    }

    #[test]
    #[traced_test]
    fn missing_target_rejects_and_logs() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, None);
        type_word(&mut game, "crane");

        assert_eq!(game.submit(), Err(Rejection::NotAWord));
        assert!(logs_contain("no target word loaded"));
    }

    #[test]
    fn share_text_after_win() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, daily("crane"));
        assert!(game.share_text().is_none());

        play(&mut game, "slate");
        play(&mut game, "crane");

        assert_eq!(
            game.share_text().unwrap(),
            "Wordle 7 2/6\n\n⬜⬜🟩⬜🟩\n🟩🟩🟩🟩🟩"
        );
    }

    #[test]
    fn share_text_after_loss_marks_x() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, Some(Puzzle::Practice(Word::new("fizzy").unwrap())));

        for word in ["slate", "apple", "sassy", "loses", "eerie", "dealt"] {
            play(&mut game, word);
        }
        let text = game.share_text().unwrap();
        assert!(text.starts_with("Practice X/6\n\n"));
        assert_eq!(text.lines().count(), 8);
    }

    #[test]
    fn check_outcome_rules() {
        let target = Word::new("crane").unwrap();
        let miss = Word::new("slate").unwrap();

        assert_eq!(check_outcome(&target, &target, 6, MAX_ROWS), GameOutcome::Win);
        assert_eq!(check_outcome(&miss, &target, 1, MAX_ROWS), GameOutcome::Ongoing);
        assert_eq!(check_outcome(&miss, &target, 5, MAX_ROWS), GameOutcome::Ongoing);
        assert_eq!(check_outcome(&miss, &target, 6, MAX_ROWS), GameOutcome::Loss);
    }
}
