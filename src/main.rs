//! Daily Wordle - CLI
//!
//! Play the daily five-letter word puzzle in a TUI or on plain stdin/stdout.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use daily_wordle::{
    commands::{run_simple, score_words, today_info},
    config::GameConfig,
    engine::Game,
    logging::init_tracing,
    output::{write_score_result, write_today},
    wordlists::{daily::DEFAULT_EPOCH, loader::WordSource},
};
use std::io;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "daily_wordle",
    about = "Guess the daily five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Accepted guesses: 'embedded' (default) or path to a .txt/.json list
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: WordSource,

    /// Daily targets in schedule order: 'embedded' (default) or path to a .txt/.json list
    #[arg(short = 't', long, global = true, default_value = "embedded")]
    targets: WordSource,

    /// First day of the schedule (puzzle 0)
    #[arg(long, global = true, default_value = DEFAULT_EPOCH)]
    epoch: NaiveDate,

    /// Play a random practice word instead of today's puzzle
    #[arg(short, long, global = true)]
    practice: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode (no TUI)
    Simple,

    /// Score a guess against a target of your choosing
    Score {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },

    /// Show today's puzzle number without revealing the word
    Today,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let config = GameConfig {
        dictionary: cli.dictionary,
        targets: cli.targets,
        epoch: cli.epoch,
        practice: cli.practice,
    };
    debug!(?config, "configuration");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Score { guess, target } => run_score_command(&guess, &target),
        Commands::Today => run_today_command(&config),
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use daily_wordle::interactive::{App, run_tui};

    let lists = config.load_word_lists();
    let puzzle = config.puzzle(&lists.targets);
    let app = App::new(&lists.dictionary, &lists.targets, puzzle, config.practice);
    run_tui(app)
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let lists = config.load_word_lists();
    let puzzle = config.puzzle(&lists.targets);
    let mut game = Game::new(&lists.dictionary, puzzle);
    run_simple(&mut game)?;
    Ok(())
}

fn run_score_command(guess: &str, target: &str) -> Result<()> {
    let result = score_words(guess, target)?;
    write_score_result(&mut io::stdout().lock(), &result)?;
    Ok(())
}

fn run_today_command(config: &GameConfig) -> Result<()> {
    let lists = config.load_word_lists();
    let info = today_info(config.schedule(), &lists.targets, Local::now().naive_local());
    write_today(&mut io::stdout().lock(), &info)?;
    Ok(())
}
