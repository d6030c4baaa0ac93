//! Command implementations

pub mod score;
pub mod simple;
pub mod today;

pub use score::{ScoreResult, score_words};
pub use simple::{enter_line, play_lines, run_simple};
pub use today::{TodayInfo, today_info};
