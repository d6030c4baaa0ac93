//! TUI rendering with ratatui
//!
//! Draws the board, keyboard, notices, and session stats.

use super::app::{App, DANCE_STAGGER, InputMode, SHAKE_DURATION};
use crate::core::{LetterOutcome, WORD_LENGTH};
use crate::engine::{Command, KeyboardState, MAX_ROWS, NoticeKind, Tile, TileState};
use crate::output::formatters::{KEYBOARD_ROWS, key_outcome};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use std::time::Instant;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                        // Header
            Constraint::Length(MAX_ROWS as u16 * 2 + 2), // Board
            Constraint::Min(5),                           // Notices
            Constraint::Length(5),                        // Keyboard
            Constraint::Length(1),                        // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_board(f, app, now, chunks[1]);
    render_messages(f, app, chunks[2]);
    render_keyboard(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = app
        .game
        .puzzle()
        .map_or_else(|| "WORDLE".to_string(), |p| p.title().to_uppercase());

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn outcome_color(outcome: LetterOutcome) -> Color {
    match outcome {
        LetterOutcome::Correct => Color::Green,
        LetterOutcome::WrongLocation => Color::Yellow,
        LetterOutcome::Wrong => Color::DarkGray,
    }
}

/// Style of a tile, honoring an in-progress flip
fn tile_style(tile: Tile, hidden: bool) -> Style {
    match tile.state {
        TileState::Revealed(outcome) if !hidden => Style::default()
            .fg(Color::Black)
            .bg(outcome_color(outcome))
            .add_modifier(Modifier::BOLD),
        TileState::Revealed(_) | TileState::Active => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        TileState::Empty => Style::default().fg(Color::DarkGray),
    }
}

fn render_board(f: &mut Frame, app: &App, now: Instant, area: Rect) {
    let board = app.game.board();
    let shaking_row = app.shake.map(|(row, _)| row);

    let mut lines = Vec::with_capacity(MAX_ROWS * 2);
    for (row_index, row) in board.rows().enumerate() {
        let flipped = app
            .reveal
            .as_ref()
            .filter(|reveal| reveal.row == row_index)
            .map(|reveal| reveal.flipped(now));
        let dancing = dance_offset(app, row_index, now);

        let spans: Vec<Span> = row
            .iter()
            .enumerate()
            .flat_map(|(column, &tile)| {
                let hidden = flipped.is_some_and(|count| column >= count);
                let mut style = tile_style(tile, hidden);
                if shaking_row == Some(row_index) && tile.state == TileState::Active {
                    style = style.fg(Color::Red);
                }
                if dancing == Some(column) {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                let letter = tile.letter.map_or('·', |ch| ch.to_ascii_uppercase());
                [Span::styled(format!(" {letter} "), style), Span::raw(" ")]
            })
            .collect();

        let indent = if shaking_row == Some(row_index) {
            shake_indent(app, now)
        } else {
            ""
        };
        let mut spans_with_indent = vec![Span::raw(indent)];
        spans_with_indent.extend(spans);
        lines.push(Line::from(spans_with_indent));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

/// Alternating offset while a rejected row shakes
fn shake_indent(app: &App, now: Instant) -> &'static str {
    let Some((_, started)) = app.shake else {
        return "";
    };
    let phase = now.saturating_duration_since(started).as_millis() / (SHAKE_DURATION.as_millis() / 8);
    if phase % 2 == 0 { "  " } else { "" }
}

/// Column currently bouncing in the win dance on the winning row
fn dance_offset(app: &App, row: usize, now: Instant) -> Option<usize> {
    let won_at = app.won_at?;
    let winning_row = app.game.current_row().checked_sub(1)?;
    if row != winning_row {
        return None;
    }
    let step = now.saturating_duration_since(won_at).as_millis() / DANCE_STAGGER.as_millis();
    usize::try_from(step).ok().filter(|&column| column < WORD_LENGTH)
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.notice.kind {
                NoticeKind::Info => Style::default().fg(Color::White),
                NoticeKind::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                NoticeKind::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.notice.text.clone()).style(style)
        })
        .collect();

    let list = List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    // Keys change color only once the flip has finished
    let keyboard: &KeyboardState = app
        .reveal
        .as_ref()
        .map_or_else(|| app.game.keyboard(), |reveal| &reveal.keyboard_before);

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .flat_map(|&key| {
                    let style = key_outcome(keyboard, key).map_or_else(
                        || Style::default().fg(Color::White),
                        |outcome| {
                            Style::default()
                                .fg(Color::Black)
                                .bg(outcome_color(outcome))
                        },
                    );
                    let label = match Command::from_virtual_key(key) {
                        Some(Command::Remove) => "⌫",
                        _ => key,
                    };
                    [Span::styled(format!(" {label} "), style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Guesses: {}/{}",
        app.stats.total_games,
        app.stats.win_rate(),
        app.game.current_row(),
        MAX_ROWS
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = match app.input_mode {
        InputMode::GameOver if app.practice => "q: Quit | n: New Word",
        InputMode::GameOver => "q: Quit",
        InputMode::Playing => "Type letters | Enter: Submit | Backspace: Delete | Esc: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
