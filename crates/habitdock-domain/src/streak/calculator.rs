use chrono::{Days, NaiveDate};
use log::trace;
use serde::{Deserialize, Serialize};

use crate::shared::{parse_log_date, DomainError};

/// Trailing window used by the completion rate when the caller has no preference
pub const DEFAULT_COMPLETION_WINDOW_DAYS: u32 = 30;

/// A dated record that either completed its habit or not.
pub trait DailyCompletion {
    fn date(&self) -> NaiveDate;
    fn is_completed(&self) -> bool;
}

impl<T: DailyCompletion + ?Sized> DailyCompletion for &T {
    fn date(&self) -> NaiveDate {
        (**self).date()
    }

    fn is_completed(&self) -> bool {
        (**self).is_completed()
    }
}

/// Minimal log snapshot: a calendar date and a completed flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: NaiveDate,
    pub completed: bool,
}

impl LogEntry {
    pub fn new(date: NaiveDate, completed: bool) -> Self {
        Self { date, completed }
    }

    /// Build an entry from a `YYYY-MM-DD` string
    pub fn parse(date: &str, completed: bool) -> Result<Self, DomainError> {
        Ok(Self::new(parse_log_date(date)?, completed))
    }
}

impl DailyCompletion for LogEntry {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn is_completed(&self) -> bool {
        self.completed
    }
}

/// Current and best consecutive-day runs of a habit. `best >= current` always.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreakResult {
    pub current: u32,
    pub best: u32,
}

fn day_diff(newer: NaiveDate, older: NaiveDate) -> i64 {
    (newer - older).num_days()
}

/// Compute the active and best streaks of a log history relative to `today`.
///
/// Only completed logs count. The current streak is non-zero only when the
/// most recent completed date is `today` or the day before; it then extends
/// backwards while adjacent completed dates are exactly one day apart.
/// Duplicate dates end a run rather than extending it.
pub fn compute_streak<L: DailyCompletion>(logs: &[L], today: NaiveDate) -> StreakResult {
    let mut dates: Vec<NaiveDate> = logs
        .iter()
        .filter(|log| log.is_completed())
        .map(|log| log.date())
        .collect();

    if dates.is_empty() {
        return StreakResult::default();
    }

    // Newest first. Stable, so equal dates keep input order.
    dates.sort_by(|a, b| b.cmp(a));

    let most_recent = dates[0];
    let is_active = most_recent == today || Some(most_recent) == today.pred_opt();

    let current = if is_active {
        let extension = dates
            .windows(2)
            .take_while(|pair| day_diff(pair[0], pair[1]) == 1)
            .count();
        1 + extension as u32
    } else {
        0
    };

    let mut run = 1u32;
    let mut best = 1u32;
    for pair in dates.windows(2) {
        if day_diff(pair[0], pair[1]) == 1 {
            run += 1;
            best = best.max(run);
        } else {
            run = 1;
        }
    }

    let result = StreakResult {
        current,
        best: best.max(current),
    };

    trace!(
        "[streak] completed_days={} most_recent={} today={} current={} best={}",
        dates.len(),
        most_recent,
        today,
        result.current,
        result.best
    );

    result
}

/// Percentage (0-100) of completed logs among the logs recorded in the
/// trailing `window_days` window (`date >= today - window_days`).
///
/// The denominator is the number of logs present in the window, capped at
/// `window_days`; days without any log do not dilute the rate. An empty
/// window yields 0.
pub fn compute_completion_rate<L: DailyCompletion>(
    logs: &[L],
    today: NaiveDate,
    window_days: u32,
) -> u8 {
    if logs.is_empty() {
        return 0;
    }

    let cutoff = today.checked_sub_days(Days::new(u64::from(window_days)));

    let (in_window, completed) = logs
        .iter()
        .filter(|log| cutoff.map_or(true, |cutoff| log.date() >= cutoff))
        .fold((0u64, 0u64), |(total, done), log| {
            (total + 1, done + u64::from(log.is_completed()))
        });

    let denominator = in_window.min(u64::from(window_days));
    if denominator == 0 {
        return 0;
    }

    // Round half up, then clamp: a window can hold window_days + 1 logs.
    let rate = (200 * completed + denominator) / (2 * denominator);
    rate.min(100) as u8
}
