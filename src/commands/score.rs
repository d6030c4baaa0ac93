//! Score command
//!
//! Scores one guess against a chosen target without playing a game.

use crate::core::{Score, Word, WordError};

/// Result of scoring a guess
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub score: Score,
}

/// Score `guess` against `target`
///
/// Neither word needs to be in a dictionary.
///
/// # Errors
///
/// Returns `WordError` if either word is not 5 ASCII letters.
pub fn score_words(guess: &str, target: &str) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    let score = Score::calculate(&guess, &target);

    Ok(ScoreResult {
        guess,
        target,
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterOutcome;

    #[test]
    fn scores_valid_words() {
        let result = score_words("CRANE", "crane").unwrap();
        assert!(result.score.is_perfect());
        assert_eq!(result.guess.text(), "crane");
    }

    #[test]
    fn scores_duplicates_literally() {
        let result = score_words("sassy", "loses").unwrap();
        assert_eq!(result.score.count(LetterOutcome::Correct), 1);
        assert_eq!(result.score.count(LetterOutcome::WrongLocation), 2);
        assert_eq!(result.score.count(LetterOutcome::Wrong), 2);
    }

    #[test]
    fn rejects_invalid_words() {
        assert!(matches!(
            score_words("cat", "crane"),
            Err(WordError::InvalidLength(3))
        ));
        assert!(score_words("crane", "cr4ne").is_err());
    }
}
