#[cfg(test)]
mod tests {
    use super::super::*;
    use chrono::{Duration, NaiveDate};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn days_ago(n: i64) -> NaiveDate {
        today() - Duration::days(n)
    }

    fn done(n: i64) -> LogEntry {
        LogEntry::new(days_ago(n), true)
    }

    fn missed(n: i64) -> LogEntry {
        LogEntry::new(days_ago(n), false)
    }

    // ============================================================
    // compute_streak
    // ============================================================

    #[test]
    fn test_empty_history_has_no_streak() {
        let logs: Vec<LogEntry> = Vec::new();
        assert_eq!(compute_streak(&logs, today()), StreakResult { current: 0, best: 0 });
    }

    #[test]
    fn test_history_without_completions_has_no_streak() {
        let logs = vec![missed(0), missed(1), missed(2)];
        assert_eq!(compute_streak(&logs, today()), StreakResult { current: 0, best: 0 });
    }

    #[test]
    fn test_single_completion_today() {
        let logs = vec![done(0)];
        assert_eq!(compute_streak(&logs, today()), StreakResult { current: 1, best: 1 });
    }

    #[test]
    fn test_single_completion_yesterday_keeps_streak_alive() {
        let logs = vec![done(1)];
        assert_eq!(compute_streak(&logs, today()), StreakResult { current: 1, best: 1 });
    }

    #[test]
    fn test_single_completion_three_days_ago() {
        let logs = vec![done(3)];
        assert_eq!(compute_streak(&logs, today()), StreakResult { current: 0, best: 1 });
    }

    #[test]
    fn test_three_consecutive_days_ending_today() {
        let logs = vec![done(0), done(1), done(2)];
        assert_eq!(compute_streak(&logs, today()), StreakResult { current: 3, best: 3 });
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let logs = vec![done(2), done(0), done(1)];
        assert_eq!(compute_streak(&logs, today()), StreakResult { current: 3, best: 3 });
    }

    #[test]
    fn test_broken_streak_before_yesterday() {
        let logs = vec![done(3), done(4)];
        assert_eq!(compute_streak(&logs, today()), StreakResult { current: 0, best: 2 });
    }

    #[test]
    fn test_best_run_older_than_current_run() {
        let logs = vec![done(10), done(9), done(8), done(1), done(0)];
        assert_eq!(compute_streak(&logs, today()), StreakResult { current: 2, best: 3 });
    }

    #[test]
    fn test_isolated_days_each_count_as_one() {
        let logs = vec![done(2), done(5), done(9)];
        assert_eq!(compute_streak(&logs, today()), StreakResult { current: 0, best: 1 });
    }

    #[test]
    fn test_missed_day_breaks_the_run() {
        // Day 1 exists but was not completed
        let logs = vec![done(0), missed(1), done(2), done(3)];
        assert_eq!(compute_streak(&logs, today()), StreakResult { current: 1, best: 2 });
    }

    #[test]
    fn test_duplicate_dates_do_not_panic() {
        let logs = vec![done(0), done(0), done(1)];
        let result = compute_streak(&logs, today());

        assert_eq!(result.current, 1);
        assert_eq!(result.best, 2);
    }

    #[test]
    fn test_future_dated_completion_is_not_current() {
        let logs = vec![LogEntry::new(today() + Duration::days(1), true)];
        assert_eq!(compute_streak(&logs, today()), StreakResult { current: 0, best: 1 });
    }

    #[test]
    fn test_streak_across_month_and_leap_day() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let logs = vec![
            LogEntry::parse("2024-03-01", true).unwrap(),
            LogEntry::parse("2024-02-29", true).unwrap(),
            LogEntry::parse("2024-02-28", true).unwrap(),
        ];
        assert_eq!(compute_streak(&logs, today), StreakResult { current: 3, best: 3 });
    }

    #[test]
    fn test_best_is_never_below_current() {
        let histories: Vec<Vec<LogEntry>> = vec![
            vec![done(0)],
            vec![done(1), done(2), done(3), done(4)],
            vec![done(0), done(1), done(5), done(6), done(7)],
            vec![done(0), done(0), done(1), done(1), done(2)],
            vec![missed(0), done(1), done(30)],
        ];

        for logs in histories {
            let result = compute_streak(&logs, today());
            assert!(result.best >= result.current, "{:?}", result);
        }
    }

    #[test]
    fn test_streak_is_deterministic() {
        let logs = vec![done(0), done(1), done(4), done(5), done(6)];
        assert_eq!(compute_streak(&logs, today()), compute_streak(&logs, today()));
    }

    #[test]
    fn test_streak_accepts_borrowed_logs() {
        let owned = vec![done(0), done(1)];
        let borrowed: Vec<&LogEntry> = owned.iter().collect();
        assert_eq!(compute_streak(&borrowed, today()), StreakResult { current: 2, best: 2 });
    }

    // ============================================================
    // compute_completion_rate
    // ============================================================

    #[test]
    fn test_completion_rate_of_empty_history_is_zero() {
        let logs: Vec<LogEntry> = Vec::new();
        assert_eq!(compute_completion_rate(&logs, today(), 30), 0);
    }

    #[test]
    fn test_completion_rate_over_logged_days() {
        let mut logs: Vec<LogEntry> = (0..7).map(done).collect();
        logs.extend((7..10).map(missed));

        assert_eq!(compute_completion_rate(&logs, today(), 30), 70);
    }

    #[test]
    fn test_sparse_history_is_not_diluted_by_missing_days() {
        let logs = vec![done(0), done(3)];
        assert_eq!(compute_completion_rate(&logs, today(), 30), 100);
    }

    #[test]
    fn test_nothing_in_window_yields_zero() {
        let logs = vec![done(40), done(41)];
        assert_eq!(compute_completion_rate(&logs, today(), 30), 0);
    }

    #[test]
    fn test_window_lower_bound_is_inclusive() {
        let logs = vec![done(30), missed(31)];
        assert_eq!(compute_completion_rate(&logs, today(), 30), 100);

        let logs = vec![missed(30), done(31)];
        assert_eq!(compute_completion_rate(&logs, today(), 30), 0);
    }

    #[test]
    fn test_rate_rounds_half_up() {
        let logs = vec![done(0), missed(1), missed(2)];
        assert_eq!(compute_completion_rate(&logs, today(), 30), 33);

        let logs = vec![done(0), done(1), missed(2)];
        assert_eq!(compute_completion_rate(&logs, today(), 30), 67);

        let mut logs = vec![done(0)];
        logs.extend((1..8).map(missed));
        assert_eq!(compute_completion_rate(&logs, today(), 30), 13);
    }

    #[test]
    fn test_full_window_plus_boundary_day_is_capped_at_100() {
        // today-30 ..= today is 31 logs for a 30-day window
        let logs: Vec<LogEntry> = (0..=30).map(done).collect();
        assert_eq!(compute_completion_rate(&logs, today(), 30), 100);
    }

    #[test]
    fn test_zero_day_window_yields_zero() {
        let logs = vec![done(0)];
        assert_eq!(compute_completion_rate(&logs, today(), 0), 0);
    }

    #[test]
    fn test_small_window_caps_denominator() {
        // 7-day window, 8 logs present (today-7 ..= today), 4 completed
        let logs = vec![
            done(0),
            done(1),
            done(2),
            done(3),
            missed(4),
            missed(5),
            missed(6),
            missed(7),
        ];
        assert_eq!(compute_completion_rate(&logs, today(), 7), 57);
    }

    #[test]
    fn test_rate_is_always_within_percentage_bounds() {
        let histories: Vec<Vec<LogEntry>> = vec![
            (0..60).map(done).collect(),
            (0..60).map(missed).collect(),
            vec![done(0), done(0), done(0)],
            vec![LogEntry::new(today() + Duration::days(3), true)],
        ];

        for logs in histories {
            for window in [0, 1, 7, 30, 90] {
                assert!(compute_completion_rate(&logs, today(), window) <= 100);
            }
        }
    }

    #[test]
    fn test_default_window_is_thirty_days() {
        assert_eq!(DEFAULT_COMPLETION_WINDOW_DAYS, 30);
    }
}
