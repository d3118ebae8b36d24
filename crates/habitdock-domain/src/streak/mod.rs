//! Streak and completion-rate calculation over a habit's log history.
//!
//! Both calculators are pure: the caller supplies the reference `today`
//! date, so repeated calls over the same snapshot return the same result.

mod calculator;

#[cfg(test)]
mod calculator_test;

pub use calculator::{
    compute_completion_rate, compute_streak, DailyCompletion, LogEntry, StreakResult,
    DEFAULT_COMPLETION_WINDOW_DAYS,
};
