//! Display functions for game state and command results

use super::formatters::{format_keyboard, format_row, paint};
use crate::commands::{ScoreResult, TodayInfo};
use crate::engine::{Board, Game, KeyboardState};
use colored::Colorize;
use std::io::{self, Write};

/// Print every row of the board
///
/// # Errors
/// Propagates write errors.
pub fn write_board(out: &mut impl Write, board: &Board) -> io::Result<()> {
    for row in board.rows() {
        writeln!(out, "  {}", format_row(row))?;
    }
    Ok(())
}

/// Print the colored keyboard
///
/// # Errors
/// Propagates write errors.
pub fn write_keyboard(out: &mut impl Write, keyboard: &KeyboardState) -> io::Result<()> {
    writeln!(out, "{}", format_keyboard(keyboard))
}

/// Print the end-of-game banner and share text
///
/// # Errors
/// Propagates write errors.
pub fn write_game_over(out: &mut impl Write, game: &Game) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(40).bright_cyan())?;
    if let Some(notice) = game.outcome_notice() {
        writeln!(out, "  {}", notice.text.bright_green().bold())?;
    }
    writeln!(out, "{}", "═".repeat(40).bright_cyan())?;

    if let Some(share) = game.share_text() {
        writeln!(out, "\n{share}\n")?;
    }
    Ok(())
}

/// Print the result of scoring one word against another
///
/// # Errors
/// Propagates write errors.
pub fn write_score_result(out: &mut impl Write, result: &ScoreResult) -> io::Result<()> {
    let letters: String = result
        .guess
        .text()
        .chars()
        .zip(result.score.outcomes())
        .map(|(ch, &outcome)| {
            paint(&format!(" {} ", ch.to_ascii_uppercase()), Some(outcome)).to_string()
        })
        .collect();

    writeln!(out, "\n  {letters}")?;
    writeln!(out, "  {}", result.score.to_emoji())?;
    writeln!(
        out,
        "\n  {} against {}",
        result.guess.text().to_uppercase().bright_white().bold(),
        result.target.text().to_uppercase().bright_yellow().bold()
    )?;
    if result.score.is_perfect() {
        writeln!(out, "  {}", "✅ Exact match".green().bold())?;
    }
    Ok(())
}

/// Print today's puzzle details without the answer
///
/// # Errors
/// Propagates write errors.
pub fn write_today(out: &mut impl Write, info: &TodayInfo) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(40).cyan())?;
    match info.number {
        Some(number) => writeln!(
            out,
            "Today is {} ({})",
            format!("Wordle {number}").bright_yellow().bold(),
            info.date
        )?,
        None => writeln!(out, "{}", "No puzzle scheduled for today".red().bold())?,
    }
    writeln!(out, "{}", "─".repeat(40).cyan())?;
    writeln!(out, "   Epoch:        {}", info.epoch)?;
    writeln!(out, "   Target words: {}", info.total_targets)?;
    if let Some(days) = info.days_until_repeat {
        writeln!(out, "   Repeats in:   {days} days")?;
    }
    Ok(())
}
