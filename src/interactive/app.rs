//! TUI application state and logic

use crate::core::{WORD_LENGTH, Word};
use crate::engine::{
    Command, Game, GameEvent, GameOutcome, GameState, KeyboardState, MAX_ROWS, Notice, NoticeKind,
};
use crate::wordlists::{Dictionary, Puzzle};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// Delay between tile flips in a reveal
pub const FLIP_STAGGER: Duration = Duration::from_millis(250);

/// How long a rejected row shakes
pub const SHAKE_DURATION: Duration = Duration::from_millis(400);

/// Delay between tiles in the win dance
pub const DANCE_STAGGER: Duration = Duration::from_millis(100);

/// Row currently flipping over
#[derive(Debug, Clone)]
pub struct Reveal {
    pub row: usize,
    pub started: Instant,
    /// Key colors from before the guess, shown until the flip finishes
    pub keyboard_before: KeyboardState,
}

impl Reveal {
    /// Number of tiles flipped by `now`
    #[must_use]
    pub fn flipped(&self, now: Instant) -> usize {
        let elapsed = now.saturating_duration_since(self.started);
        let steps = elapsed.as_millis() / FLIP_STAGGER.as_millis();
        (steps as usize + 1).min(WORD_LENGTH)
    }

    #[must_use]
    pub fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started)
            >= FLIP_STAGGER * u32::try_from(WORD_LENGTH).unwrap_or(u32::MAX)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    GameOver,
}

/// A notice with the time it was posted
#[derive(Debug, Clone)]
pub struct Message {
    pub notice: Notice,
    pub posted: Instant,
}

impl Message {
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.notice
            .duration
            .is_some_and(|duration| now.saturating_duration_since(self.posted) >= duration)
    }
}

/// Games played in this run; nothing is saved
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; MAX_ROWS + 1],
}

impl Statistics {
    pub fn record(&mut self, outcome: GameOutcome, guesses: usize) {
        self.total_games += 1;
        if outcome == GameOutcome::Win {
            self.games_won += 1;
            if let Some(slot) = self.guess_distribution.get_mut(guesses) {
                *slot += 1;
            }
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

/// Application state
pub struct App<'a> {
    pub game: Game<'a>,
    pub dictionary: &'a Dictionary,
    pub targets: &'a [Word],
    pub practice: bool,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub reveal: Option<Reveal>,
    pub shake: Option<(usize, Instant)>,
    pub won_at: Option<Instant>,
    pub stats: Statistics,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(
        dictionary: &'a Dictionary,
        targets: &'a [Word],
        puzzle: Option<Puzzle>,
        practice: bool,
    ) -> Self {
        Self {
            game: Game::new(dictionary, puzzle),
            dictionary,
            targets,
            practice,
            input_mode: InputMode::Playing,
            messages: Vec::new(),
            reveal: None,
            shake: None,
            won_at: None,
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Whether keys reach the game right now
    #[must_use]
    pub const fn accepts_input(&self) -> bool {
        self.reveal.is_none() && matches!(self.input_mode, InputMode::Playing)
    }

    pub fn post(&mut self, notice: Notice, now: Instant) {
        self.messages.push(Message { notice, posted: now });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Map a terminal key press to a game command
    ///
    /// Shift is allowed; chords with Ctrl or Alt map to nothing.
    #[must_use]
    pub fn command_for(key: &KeyEvent) -> Option<Command> {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }
        match key.code {
            KeyCode::Enter => Command::from_key_name("Enter"),
            KeyCode::Backspace => Command::from_key_name("Backspace"),
            KeyCode::Char(c) => Command::from_key_name(c.encode_utf8(&mut [0; 4])),
            _ => None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl_c = key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl_c || key.code == KeyCode::Esc {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(now),
                _ => {}
            },
            InputMode::Playing => {
                if !self.accepts_input() {
                    return;
                }
                if let Some(command) = Self::command_for(&key) {
                    self.apply(command, now);
                }
            }
        }
    }

    pub fn apply(&mut self, command: Command, now: Instant) {
        let keyboard_before = self.game.keyboard().clone();

        match self.game.apply(command) {
            GameEvent::Rejected(rejection) => {
                self.shake = Some((self.game.current_row(), now));
                self.post(Notice::from(rejection), now);
            }
            GameEvent::Revealed(evaluation) => {
                debug!(row = evaluation.row, outcome = ?evaluation.outcome, "revealing row");
                self.reveal = Some(Reveal {
                    row: evaluation.row,
                    started: now,
                    keyboard_before,
                });
            }
            GameEvent::LetterAdded { .. } | GameEvent::LetterRemoved { .. } | GameEvent::Ignored => {}
        }
    }

    /// Advance animations; finishes a reveal once every tile has flipped
    pub fn tick(&mut self, now: Instant) {
        self.messages.retain(|message| !message.is_expired(now));

        if self
            .shake
            .is_some_and(|(_, started)| now.saturating_duration_since(started) >= SHAKE_DURATION)
        {
            self.shake = None;
        }

        if self.reveal.as_ref().is_some_and(|reveal| reveal.is_done(now)) {
            self.reveal = None;
            self.finish_turn(now);
        }
    }

    fn finish_turn(&mut self, now: Instant) {
        let Some(notice) = self.game.outcome_notice() else {
            return;
        };

        let outcome = if self.game.state() == GameState::Won {
            self.won_at = Some(now);
            GameOutcome::Win
        } else {
            GameOutcome::Loss
        };

        self.stats.record(outcome, self.game.guesses().len());
        self.post(notice, now);
        self.input_mode = InputMode::GameOver;

        let hint = if self.practice {
            "Press 'n' for a new word or 'q' to quit."
        } else {
            "Come back tomorrow! Press 'q' to quit."
        };
        self.post(Notice::persistent(hint, NoticeKind::Info), now);
    }

    /// Start over with a fresh practice word
    ///
    /// Daily puzzles are one per day, so this only works in practice mode.
    pub fn new_game(&mut self, now: Instant) {
        if !self.practice {
            self.post(
                Notice::transient("Only one daily puzzle per day", NoticeKind::Error),
                now,
            );
            return;
        }

        self.game = Game::new(self.dictionary, Puzzle::random(self.targets));
        self.messages.clear();
        self.reveal = None;
        self.shake = None;
        self.won_at = None;
        self.input_mode = InputMode::Playing;
        self.post(Notice::transient("New game started!", NoticeKind::Info), now);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let frame_interval = Duration::from_millis(50);

    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|f| super::rendering::ui(f, &app, now))?;

        if event::poll(frame_interval)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key, Instant::now());
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
