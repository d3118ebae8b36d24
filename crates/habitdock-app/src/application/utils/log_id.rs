use chrono::NaiveDate;
use sha2::{Digest, Sha256};

use habitdock_domain::shared::{format_log_date, HabitId, LogId};

/// Deterministic log id for `(habit_id, date)`.
///
/// The first 16 bytes of `SHA-256("<habit_id>:<YYYY-MM-DD>")`, laid out like a UUID.
pub fn derive_log_id(habit_id: &HabitId, date: NaiveDate) -> LogId {
    let mut hasher = Sha256::new();
    hasher.update(habit_id.as_str().as_bytes());
    hasher.update(b":");
    hasher.update(format_log_date(date).as_bytes());
    let digest = hasher.finalize();

    let hex: String = digest[..16].iter().map(|b| format!("{:02x}", b)).collect();
    LogId::from_string(&format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_same_inputs_give_same_id() {
        let habit = HabitId::from_string("habit-1");
        assert_eq!(
            derive_log_id(&habit, date("2024-02-29")),
            derive_log_id(&habit, date("2024-02-29"))
        );
    }

    #[test]
    fn test_id_differs_per_day_and_habit() {
        let a = HabitId::from_string("habit-1");
        let b = HabitId::from_string("habit-2");
        let day = date("2024-03-01");

        assert_ne!(derive_log_id(&a, day), derive_log_id(&a, date("2024-03-02")));
        assert_ne!(derive_log_id(&a, day), derive_log_id(&b, day));
    }

    #[test]
    fn test_id_is_uuid_shaped() {
        let id = derive_log_id(&HabitId::from_string("h"), date("2024-01-01"));
        let parts: Vec<_> = id.as_str().split('-').map(str::len).collect();
        assert_eq!(parts, vec![8, 4, 4, 4, 12]);
    }
}
