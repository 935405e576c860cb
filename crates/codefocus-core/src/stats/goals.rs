//! Daily and weekly pomodoro goals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::daily::{find_record, DayRecord};
use crate::clock::week_start;
use crate::error::ValidationError;

/// Optional completed-pomodoro targets. `None` means the goal is disabled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Goals {
    pub daily_pomodoros: Option<u32>,
    pub weekly_pomodoros: Option<u32>,
}

impl Goals {
    /// Reject zero targets; disable a goal with `None` instead.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, target) in [
            ("dailyPomodoros", self.daily_pomodoros),
            ("weeklyPomodoros", self.weekly_pomodoros),
        ] {
            if target == Some(0) {
                return Err(ValidationError::InvalidValue {
                    field: field.to_string(),
                    message: "target must be positive".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalStatus {
    pub current: u32,
    pub target: Option<u32>,
    /// `min(100, current / target * 100)`; `None` when the goal is disabled.
    pub percentage: Option<f64>,
}

impl GoalStatus {
    fn new(current: u32, target: Option<u32>) -> Self {
        // A zero target counts as unset, same as a missing one.
        let percentage = target
            .filter(|t| *t > 0)
            .map(|t| (f64::from(current) / f64::from(t) * 100.0).min(100.0));
        Self {
            current,
            target,
            percentage,
        }
    }

    pub fn is_met(&self) -> bool {
        self.percentage.is_some_and(|p| p >= 100.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalProgress {
    pub daily: GoalStatus,
    pub weekly: GoalStatus,
}

/// Progress toward today's and this week's targets.
///
/// The weekly count sums every record dated on or after the Sunday that
/// starts `today`'s week.
pub fn compute_goal_progress(daily_log: &[DayRecord], goals: &Goals, today: NaiveDate) -> GoalProgress {
    let daily_current = find_record(daily_log, today).map_or(0, |r| r.completed_pomodoros);

    let start = week_start(today);
    let weekly_current = daily_log
        .iter()
        .filter(|r| r.date >= start)
        .map(|r| r.completed_pomodoros)
        .sum();

    GoalProgress {
        daily: GoalStatus::new(daily_current, goals.daily_pomodoros),
        weekly: GoalStatus::new(weekly_current, goals.weekly_pomodoros),
    }
}
