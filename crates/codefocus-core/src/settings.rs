//! Timer settings stored with the rest of the persisted state.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Which interval the timer is running.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TimerMode {
    Pomodoro,
    ShortBreak,
    LongBreak,
}

/// Durations in minutes plus auto-start behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub pomodoro: u32,
    pub short_break: u32,
    pub long_break: u32,
    pub auto_start_breaks: bool,
    pub auto_start_pomodoros: bool,
    /// A long break follows every Nth completed pomodoro.
    pub long_break_interval: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pomodoro: 25,
            short_break: 5,
            long_break: 15,
            auto_start_breaks: false,
            auto_start_pomodoros: false,
            long_break_interval: 4,
        }
    }
}

impl Settings {
    /// All durations and the long-break interval must be positive.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("pomodoro", self.pomodoro),
            ("shortBreak", self.short_break),
            ("longBreak", self.long_break),
            ("longBreakInterval", self.long_break_interval),
        ] {
            if value == 0 {
                return Err(ValidationError::InvalidValue {
                    field: field.to_string(),
                    message: "must be a positive integer".to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn duration_minutes(&self, mode: TimerMode) -> u32 {
        match mode {
            TimerMode::Pomodoro => self.pomodoro,
            TimerMode::ShortBreak => self.short_break,
            TimerMode::LongBreak => self.long_break,
        }
    }

    /// Break to take after `completed_in_session` focus intervals.
    pub fn break_after(&self, completed_in_session: u32) -> TimerMode {
        if self.long_break_interval > 0
            && completed_in_session > 0
            && completed_in_session % self.long_break_interval == 0
        {
            TimerMode::LongBreak
        } else {
            TimerMode::ShortBreak
        }
    }

    /// Set one field by its wire name, e.g. `"shortBreak"` or `"short_break"`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ValidationError> {
        let invalid = |message: &str| ValidationError::InvalidValue {
            field: key.to_string(),
            message: message.to_string(),
        };
        let number = || value.parse::<u32>().map_err(|_| invalid("expected a non-negative integer"));
        let flag = || value.parse::<bool>().map_err(|_| invalid("expected true or false"));

        let mut next = self.clone();
        match key {
            "pomodoro" => next.pomodoro = number()?,
            "shortBreak" | "short_break" => next.short_break = number()?,
            "longBreak" | "long_break" => next.long_break = number()?,
            "longBreakInterval" | "long_break_interval" => next.long_break_interval = number()?,
            "autoStartBreaks" | "auto_start_breaks" => next.auto_start_breaks = flag()?,
            "autoStartPomodoros" | "auto_start_pomodoros" => next.auto_start_pomodoros = flag()?,
            _ => return Err(invalid("unknown setting")),
        }
        next.validate()?;
        *self = next;
        Ok(())
    }
}
