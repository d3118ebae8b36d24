use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::{HabitFrequency, HabitType, Reminder};
use crate::shared::{DomainError, HabitId, UserId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    id: HabitId,
    user_id: UserId,
    name: String,
    habit_type: HabitType,
    target_value: f64,
    frequency: HabitFrequency,
    icon: Option<String>,
    color: Option<String>,
    reminder: Reminder,
    is_archived: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Habit {
    pub fn new(
        user_id: UserId,
        name: String,
        habit_type: HabitType,
        target_value: f64,
        frequency: HabitFrequency,
    ) -> Result<Self, DomainError> {
        Self::validate_name(&name)?;
        Self::validate_target(target_value)?;

        let now = Utc::now();
        Ok(Self {
            id: HabitId::new(),
            user_id,
            name: name.trim().to_string(),
            habit_type,
            target_value,
            frequency,
            icon: None,
            color: None,
            reminder: Reminder::disabled(),
            is_archived: false,
            created_at: now,
            updated_at: now,
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: HabitId,
        user_id: UserId,
        name: String,
        habit_type: HabitType,
        target_value: f64,
        frequency: HabitFrequency,
        icon: Option<String>,
        color: Option<String>,
        reminder: Reminder,
        is_archived: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            habit_type,
            target_value,
            frequency,
            icon,
            color,
            reminder,
            is_archived,
            created_at,
            updated_at,
        }
    }

    fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::Validation(
                "Habit name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    fn validate_target(target_value: f64) -> Result<(), DomainError> {
        if !target_value.is_finite() || target_value < 0.0 {
            return Err(DomainError::Validation(
                "Target value must be a non-negative number".to_string(),
            ));
        }
        Ok(())
    }

    pub fn id(&self) -> &HabitId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn habit_type(&self) -> HabitType {
        self.habit_type
    }

    pub fn target_value(&self) -> f64 {
        self.target_value
    }

    pub fn frequency(&self) -> HabitFrequency {
        self.frequency
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn reminder(&self) -> &Reminder {
        &self.reminder
    }

    pub fn is_archived(&self) -> bool {
        self.is_archived
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// A logged value completes the habit when it meets or exceeds the target
    pub fn is_met_by(&self, value: f64) -> bool {
        value >= self.target_value
    }

    pub fn rename(&mut self, name: String) -> Result<(), DomainError> {
        Self::validate_name(&name)?;
        self.name = name.trim().to_string();
        self.touch();
        Ok(())
    }

    pub fn set_target(&mut self, target_value: f64) -> Result<(), DomainError> {
        Self::validate_target(target_value)?;
        self.target_value = target_value;
        self.touch();
        Ok(())
    }

    pub fn set_type(&mut self, habit_type: HabitType) {
        self.habit_type = habit_type;
        self.touch();
    }

    pub fn set_frequency(&mut self, frequency: HabitFrequency) {
        self.frequency = frequency;
        self.touch();
    }

    pub fn set_appearance(&mut self, icon: Option<String>, color: Option<String>) {
        self.icon = icon;
        self.color = color;
        self.touch();
    }

    pub fn set_reminder(&mut self, reminder: Reminder) {
        self.reminder = reminder;
        self.touch();
    }

    pub fn archive(&mut self) -> Result<(), DomainError> {
        if self.is_archived {
            return Err(DomainError::HabitArchived(self.id.to_string()));
        }
        self.is_archived = true;
        self.touch();
        Ok(())
    }

    /// Reject mutations that only make sense for active habits
    pub fn ensure_active(&self) -> Result<(), DomainError> {
        if self.is_archived {
            return Err(DomainError::HabitArchived(self.id.to_string()));
        }
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
