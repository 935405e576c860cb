//! Focus score, experience level, and lifetime focus time.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::daily::DayRecord;

/// Streak length that earns the first +5 bonus.
const STREAK_BONUS_SHORT: u32 = 3;
/// Streak length that earns the second +5 bonus.
const STREAK_BONUS_LONG: u32 = 7;
const STREAK_BONUS_POINTS: u32 = 5;

/// Today's focus score in `0..=100`.
///
/// A day with no completed or skipped intervals scores 100. Otherwise the
/// score is the rounded completion percentage plus streak bonuses, capped at
/// 100.
pub fn compute_focus_score(today: &DayRecord, current_streak: u32) -> u32 {
    let total = today.completed_pomodoros + today.skipped_pomodoros;
    if total == 0 {
        return 100;
    }

    let rate = f64::from(today.completed_pomodoros) / f64::from(total);
    let mut score = (rate * 100.0).round() as u32;

    if current_streak >= STREAK_BONUS_SHORT {
        score = (score + STREAK_BONUS_POINTS).min(100);
    }
    if current_streak >= STREAK_BONUS_LONG {
        score = (score + STREAK_BONUS_POINTS).min(100);
    }
    score
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LevelName {
    Apprentice,
    Craftsman,
    Master,
    Grandmaster,
}

impl fmt::Display for LevelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LevelName::Apprentice => "Apprentice",
            LevelName::Craftsman => "Craftsman",
            LevelName::Master => "Master",
            LevelName::Grandmaster => "Grandmaster",
        };
        f.write_str(name)
    }
}

/// Experience level derived from lifetime focus hours.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub name: LevelName,
    pub tier: u8,
    /// Percent of the way to `next_tier`. Not clamped below Grandmaster.
    pub progress: f64,
    /// Hours needed for the next tier; `None` at the top tier.
    pub next_tier: Option<u32>,
}

/// Level for a lifetime total of focus minutes.
///
/// | hours    | level       | progress          |
/// |----------|-------------|-------------------|
/// | < 25     | Apprentice  | hours / 25 * 100  |
/// | 25..100  | Craftsman   | (hours - 25) / 0.75 |
/// | 100..500 | Master      | (hours - 100) / 4 |
/// | >= 500   | Grandmaster | 100               |
pub fn compute_level(total_focus_minutes: u64) -> Level {
    let hours = total_focus_minutes / 60;
    let h = hours as f64;

    if hours >= 500 {
        Level {
            name: LevelName::Grandmaster,
            tier: 4,
            progress: 100.0,
            next_tier: None,
        }
    } else if hours >= 100 {
        Level {
            name: LevelName::Master,
            tier: 3,
            progress: (h - 100.0) / 4.0,
            next_tier: Some(500),
        }
    } else if hours >= 25 {
        Level {
            name: LevelName::Craftsman,
            tier: 2,
            progress: (h - 25.0) / 0.75,
            next_tier: Some(100),
        }
    } else {
        Level {
            name: LevelName::Apprentice,
            tier: 1,
            progress: h / 25.0 * 100.0,
            next_tier: Some(25),
        }
    }
}

/// Lifetime focus time split into hours and minutes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TotalTime {
    pub hours: u64,
    pub minutes: u64,
    pub total: u64,
}

pub fn format_total_time(total_focus_minutes: u64) -> TotalTime {
    TotalTime {
        hours: total_focus_minutes / 60,
        minutes: total_focus_minutes % 60,
        total: total_focus_minutes,
    }
}
