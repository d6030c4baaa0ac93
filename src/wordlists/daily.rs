//! Daily target selection
//!
//! The target for a day is `targets[floor((now - epoch) / 1 day)]`, with the
//! index wrapping around once the list runs out. Dates are taken on the
//! player's wall clock, so everyone in one timezone shares a puzzle.

use crate::core::Word;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use rand::seq::IndexedRandom;
use std::borrow::Cow;

/// Milliseconds in one day
pub const MS_PER_DAY: i64 = 86_400_000;

/// Default schedule start, as passed on the command line
pub const DEFAULT_EPOCH: &str = "2022-01-01";

/// Whole days elapsed between two millisecond timestamps
///
/// Returns `None` when `now_ms` is before `epoch_ms`.
///
/// # Examples
/// ```
/// use daily_wordle::wordlists::daily::{MS_PER_DAY, day_offset};
///
/// assert_eq!(day_offset(MS_PER_DAY * 3 + 5, 0), Some(3));
/// assert_eq!(day_offset(MS_PER_DAY - 1, 0), Some(0));
/// assert_eq!(day_offset(-1, 0), None);
/// ```
#[must_use]
pub fn day_offset(now_ms: i64, epoch_ms: i64) -> Option<u64> {
    let elapsed = now_ms.checked_sub(epoch_ms)?;
    u64::try_from(elapsed.div_euclid(MS_PER_DAY)).ok()
}

/// A puzzle to play: the daily word or a random practice word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Puzzle {
    Daily { number: u64, word: Word },
    Practice(Word),
}

impl Puzzle {
    /// Pick a random practice target
    #[must_use]
    pub fn random(targets: &[Word]) -> Option<Self> {
        targets
            .choose(&mut rand::rng())
            .cloned()
            .map(Self::Practice)
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        match self {
            Self::Daily { word, .. } | Self::Practice(word) => word,
        }
    }

    #[must_use]
    pub const fn number(&self) -> Option<u64> {
        match self {
            Self::Daily { number, .. } => Some(*number),
            Self::Practice(_) => None,
        }
    }

    #[must_use]
    pub const fn is_daily(&self) -> bool {
        matches!(self, Self::Daily { .. })
    }

    #[must_use]
    pub fn title(&self) -> Cow<'static, str> {
        match self {
            Self::Daily { number, .. } => format!("Wordle {number}").into(),
            Self::Practice(_) => "Practice".into(),
        }
    }
}

/// Maps calendar days to target words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySchedule {
    epoch: NaiveDate,
}

impl Default for DailySchedule {
    fn default() -> Self {
        Self::new(DEFAULT_EPOCH.parse().unwrap_or_default())
    }
}

impl DailySchedule {
    #[must_use]
    pub const fn new(epoch: NaiveDate) -> Self {
        Self { epoch }
    }

    #[must_use]
    pub const fn epoch(&self) -> NaiveDate {
        self.epoch
    }

    /// Day index for a wall-clock time
    ///
    /// Returns `None` before the epoch.
    #[must_use]
    pub fn day_index(&self, now: NaiveDateTime) -> Option<u64> {
        let epoch = self.epoch.and_time(NaiveTime::MIN);
        day_offset(
            now.and_utc().timestamp_millis(),
            epoch.and_utc().timestamp_millis(),
        )
    }

    /// Day index for a zoned time, read on that zone's wall clock
    #[must_use]
    pub fn day_index_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Option<u64> {
        self.day_index(now.naive_local())
    }

    /// Puzzle for a given day index
    ///
    /// Returns `None` when there are no targets.
    #[must_use]
    pub fn puzzle_for_day(&self, day: u64, targets: &[Word]) -> Option<Puzzle> {
        let len = u64::try_from(targets.len()).ok().filter(|&len| len > 0)?;
        let index = usize::try_from(day % len).ok()?;

        Some(Puzzle::Daily {
            number: day,
            word: targets[index].clone(),
        })
    }

    /// Puzzle for a wall-clock time
    #[must_use]
    pub fn puzzle_at(&self, now: NaiveDateTime, targets: &[Word]) -> Option<Puzzle> {
        self.puzzle_for_day(self.day_index(now)?, targets)
    }

    /// Today's puzzle on the local clock
    #[must_use]
    pub fn today(&self, targets: &[Word]) -> Option<Puzzle> {
        self.puzzle_for_day(self.day_index_at(&Local::now())?, targets)
    }
}
