//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: each line is typed into the current
//! row and submitted.

use crate::core::WORD_LENGTH;
use crate::engine::{Command, Game, GameEvent, Notice, Rejection};
use crate::output::{write_board, write_game_over, write_keyboard};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(game: &mut Game) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(game, &mut stdin.lock(), &mut stdout.lock())
}

/// Drive a game from any line source
///
/// Stops when the game ends, the input is exhausted, or the player types
/// `quit`.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_lines(game: &mut Game, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n╔════════════════════════════════════════╗")?;
    writeln!(out, "║{:^40}║", title_line(game))?;
    writeln!(out, "╚════════════════════════════════════════╝\n")?;
    writeln!(out, "Guess the five-letter word in six tries.")?;
    writeln!(out, "Type a word and press Enter, or 'quit' to exit.\n")?;

    while !game.is_over() {
        write!(out, "Guess {}/6: ", game.current_row() + 1)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }
        let line = line.trim();

        if matches!(line, "quit" | "q" | "exit") {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        }

        match enter_line(game, line) {
            GameEvent::Revealed(_) => {
                writeln!(out)?;
                write_board(out, game.board())?;
                writeln!(out)?;
                write_keyboard(out, game.keyboard())?;
                writeln!(out)?;
            }
            GameEvent::Rejected(rejection) => {
                let notice = Notice::from(rejection);
                writeln!(out, "❌ {}\n", notice.text.red())?;
            }
            _ => {}
        }
    }

    write_game_over(out, game)
}

/// Replace the current row with `line` and submit it
///
/// Non-letters in the line are ignored, as on a keyboard. A line with more
/// than five letters is rejected whole rather than cut short. A rejected row
/// is cleared so the next line starts fresh.
pub fn enter_line(game: &mut Game, line: &str) -> GameEvent {
    while game.remove_letter() {}
    if game.is_over() {
        return GameEvent::Ignored;
    }
    if line.chars().filter(char::is_ascii_alphabetic).count() > WORD_LENGTH {
        return GameEvent::Rejected(Rejection::NotAWord);
    }

    for ch in line.chars() {
        game.apply(Command::Letter(ch));
    }

    let event = game.apply(Command::Submit);
    if matches!(event, GameEvent::Rejected(_)) {
        while game.remove_letter() {}
    }
    event
}

fn title_line(game: &Game) -> String {
    game.puzzle()
        .map_or_else(|| "Wordle".to_string(), |p| p.title().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::engine::{GameState, Rejection};
    use crate::wordlists::loader::words_from_slice;
    use crate::wordlists::{Dictionary, Puzzle};
    use std::io::Cursor;

    fn dictionary() -> Dictionary {
        Dictionary::new(words_from_slice(&[
            "crane", "slate", "apple", "sassy", "loses", "eerie", "dealt",
        ]))
    }

    fn puzzle(word: &str) -> Option<Puzzle> {
        Some(Puzzle::Daily {
            number: 12,
            word: Word::new(word).unwrap(),
        })
    }

    fn run(game: &mut Game, script: &str) -> String {
        colored::control::set_override(false);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        play_lines(game, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn enter_line_ignores_symbols() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, puzzle("crane"));

        let event = enter_line(&mut game, "s-l a7te");
        assert!(matches!(event, GameEvent::Revealed(ref e) if e.guess.text() == "slate"));
    }

    #[test]
    fn enter_line_clears_rejected_row() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, puzzle("crane"));

        assert_eq!(
            enter_line(&mut game, "zzzzz"),
            GameEvent::Rejected(Rejection::NotAWord)
        );
        assert!(game.buffer().is_empty());
        assert_eq!(
            enter_line(&mut game, "cat"),
            GameEvent::Rejected(Rejection::TooShort)
        );
    }

    #[test]
    fn enter_line_rejects_long_lines_whole() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, puzzle("crane"));

        assert_eq!(
            enter_line(&mut game, "slates"),
            GameEvent::Rejected(Rejection::NotAWord)
        );
        assert_eq!(game.current_row(), 0);
        assert!(game.buffer().is_empty());
        assert!(game.guesses().is_empty());

        // Symbols do not count toward the length
        assert!(matches!(enter_line(&mut game, "s.l.a.t.e"), GameEvent::Revealed(_)));
    }

    #[test]
    fn winning_script() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, puzzle("crane"));
        let text = run(&mut game, "cat\nzzzzz\nslates\nslate\ncrane\n");

        assert_eq!(game.state(), GameState::Won);
        assert!(text.contains("Not enough letters!"));
        assert!(text.contains("Not in the word list!"));
        assert!(text.contains("You Win"));
        assert!(text.contains("Wordle 12 2/6"));
    }

    #[test]
    fn losing_script_reveals_target() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, puzzle("crane"));
        let text = run(&mut game, "slate\napple\nsassy\nloses\neerie\ndealt\n");

        assert_eq!(game.state(), GameState::Lost);
        assert!(text.contains("CRANE"));
        assert!(text.contains("Wordle 12 X/6"));
    }

    #[test]
    fn quit_and_eof_stop_early() {
        let dictionary = dictionary();

        let mut game = Game::new(&dictionary, puzzle("crane"));
        let text = run(&mut game, "slate\nquit\ncrane\n");
        assert!(text.contains("Thanks for playing"));
        assert_eq!(game.current_row(), 1);

        let mut game = Game::new(&dictionary, puzzle("crane"));
        run(&mut game, "");
        assert_eq!(game.state(), GameState::AcceptingInput);
    }
}
