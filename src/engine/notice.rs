//! Rejections and player-facing notices

use std::time::Duration;
use thiserror::Error;

/// How long transient notices stay on screen
pub const NOTICE_DURATION: Duration = Duration::from_millis(1000);

/// Why a submitted row was not accepted
///
/// All rejections are recoverable: the typed letters stay in place for
/// editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Not enough letters!")]
    TooShort,
    #[error("Not in the word list!")]
    NotAWord,
    #[error("Input is locked")]
    InputLocked,
}

/// Severity of a notice, used for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// A message for the player
///
/// Notices with a duration fade after it elapses; notices without one stay
/// until the session ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    pub duration: Option<Duration>,
}

impl Notice {
    #[must_use]
    pub fn transient(text: impl Into<String>, kind: NoticeKind) -> Self {
        Self {
            text: text.into(),
            kind,
            duration: Some(NOTICE_DURATION),
        }
    }

    #[must_use]
    pub fn persistent(text: impl Into<String>, kind: NoticeKind) -> Self {
        Self {
            text: text.into(),
            kind,
            duration: None,
        }
    }

    /// Celebration shown on a win
    #[must_use]
    pub fn win() -> Self {
        Self::persistent("You Win", NoticeKind::Success)
    }

    /// Target reveal shown on a loss
    #[must_use]
    pub fn reveal(target: &str) -> Self {
        Self::persistent(target.to_uppercase(), NoticeKind::Info)
    }

    #[must_use]
    pub const fn is_transient(&self) -> bool {
        self.duration.is_some()
    }
}

impl From<Rejection> for Notice {
    fn from(rejection: Rejection) -> Self {
        Self::transient(rejection.to_string(), NoticeKind::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_messages() {
        assert_eq!(Rejection::TooShort.to_string(), "Not enough letters!");
        assert_eq!(Rejection::NotAWord.to_string(), "Not in the word list!");
    }

    #[test]
    fn rejection_notice_is_transient() {
        let notice = Notice::from(Rejection::NotAWord);
        assert!(notice.is_transient());
        assert_eq!(notice.duration, Some(Duration::from_secs(1)));
        assert_eq!(notice.kind, NoticeKind::Error);
    }

    #[test]
    fn terminal_notices_persist() {
        assert!(!Notice::win().is_transient());

        let reveal = Notice::reveal("crane");
        assert_eq!(reveal.text, "CRANE");
        assert!(!reveal.is_transient());
    }
}
