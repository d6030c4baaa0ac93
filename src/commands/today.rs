//! Today command
//!
//! Reports which daily puzzle is live without revealing its word.

use crate::core::Word;
use crate::wordlists::DailySchedule;
use chrono::{NaiveDate, NaiveDateTime};

/// Details of the day's puzzle
pub struct TodayInfo {
    pub number: Option<u64>,
    pub date: NaiveDate,
    pub epoch: NaiveDate,
    pub total_targets: usize,
    /// Days until the schedule wraps back to the first target
    pub days_until_repeat: Option<u64>,
}

/// Describe the puzzle live at `now`
#[must_use]
pub fn today_info(schedule: DailySchedule, targets: &[Word], now: NaiveDateTime) -> TodayInfo {
    let number = schedule
        .puzzle_at(now, targets)
        .and_then(|puzzle| puzzle.number());
    let total = targets.len() as u64;
    let days_until_repeat = number.map(|n| total - n % total);

    TodayInfo {
        number,
        date: now.date(),
        epoch: schedule.epoch(),
        total_targets: targets.len(),
        days_until_repeat,
    }
}
