use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::DomainError;

/// Kind of wellness habit being tracked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HabitType {
    Exercise,
    Water,
    Sleep,
    Mood,
}

impl HabitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HabitType::Exercise => "exercise",
            HabitType::Water => "water",
            HabitType::Sleep => "sleep",
            HabitType::Mood => "mood",
        }
    }

    /// Unit the habit's target and log values are measured in
    pub fn unit_label(&self) -> &'static str {
        match self {
            HabitType::Exercise => "minutes",
            HabitType::Water => "glasses",
            HabitType::Sleep => "hours",
            HabitType::Mood => "rating",
        }
    }
}

impl FromStr for HabitType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exercise" => Ok(HabitType::Exercise),
            "water" => Ok(HabitType::Water),
            "sleep" => Ok(HabitType::Sleep),
            "mood" => Ok(HabitType::Mood),
            _ => Err(DomainError::InvalidInput(format!("Unknown habit type: {s}"))),
        }
    }
}

impl fmt::Display for HabitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HabitFrequency {
    #[default]
    Daily,
    Weekly,
    Custom,
}

impl HabitFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            HabitFrequency::Daily => "daily",
            HabitFrequency::Weekly => "weekly",
            HabitFrequency::Custom => "custom",
        }
    }
}

impl FromStr for HabitFrequency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(HabitFrequency::Daily),
            "weekly" => Ok(HabitFrequency::Weekly),
            "custom" => Ok(HabitFrequency::Custom),
            _ => Err(DomainError::InvalidInput(format!(
                "Unknown habit frequency: {s}"
            ))),
        }
    }
}

impl fmt::Display for HabitFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Optional reminder configuration ("HH:MM" local time)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Reminder {
    pub enabled: bool,
    pub time: Option<String>,
}

impl Reminder {
    pub fn new(enabled: bool, time: Option<String>) -> Result<Self, DomainError> {
        if let Some(t) = &time {
            chrono::NaiveTime::parse_from_str(t, "%H:%M").map_err(|e| {
                DomainError::Validation(format!("Invalid reminder time '{}': {}", t, e))
            })?;
        }
        if enabled && time.is_none() {
            return Err(DomainError::Validation(
                "Reminder time is required when reminders are enabled".to_string(),
            ));
        }
        Ok(Self { enabled, time })
    }

    pub fn disabled() -> Self {
        Self::default()
    }
}
