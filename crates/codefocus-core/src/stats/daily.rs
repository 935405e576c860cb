//! Daily activity log and the aggregate rollup maintained over it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Activity for one calendar date. At most one record exists per date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    pub date: NaiveDate,
    pub completed_pomodoros: u32,
    pub skipped_pomodoros: u32,
    /// Minutes of completed focus only; skipped intervals contribute nothing.
    pub focus_minutes: u32,
}

impl DayRecord {
    /// A zeroed record for `date`.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            completed_pomodoros: 0,
            skipped_pomodoros: 0,
            focus_minutes: 0,
        }
    }

    /// True when at least one focus interval was completed or skipped.
    pub fn has_activity(&self) -> bool {
        self.completed_pomodoros + self.skipped_pomodoros > 0
    }
}

/// Best single day by completed count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BestDay {
    pub date: NaiveDate,
    pub pomodoros: u32,
}

/// Best Sunday-started week by summed completed count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BestWeek {
    pub start_date: NaiveDate,
    pub pomodoros: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PersonalRecords {
    #[serde(rename = "mostProductiveDay", alias = "bestDay")]
    pub best_day: Option<BestDay>,
    #[serde(rename = "mostProductiveWeek", alias = "bestWeek")]
    pub best_week: Option<BestWeek>,
}

/// Lifetime rollup over the activity log.
///
/// Invariants: `longest_streak >= current_streak`, and the lifetime counters
/// never decrease.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_focus_minutes: u64,
    pub total_pomodoros: u64,
    /// Stored in append order, not necessarily sorted by date.
    pub daily_stats: Vec<DayRecord>,
    pub last_active_date: Option<NaiveDate>,
    pub personal_records: PersonalRecords,
}

impl AggregateStats {
    /// The stored record for `date`, if any.
    pub fn record_for(&self, date: NaiveDate) -> Option<&DayRecord> {
        find_record(&self.daily_stats, date)
    }
}

pub(crate) fn find_record(daily_log: &[DayRecord], date: NaiveDate) -> Option<&DayRecord> {
    daily_log.iter().find(|r| r.date == date)
}

/// Today's record, or a zeroed one when nothing happened yet.
pub fn today_record(daily_log: &[DayRecord], today: NaiveDate) -> DayRecord {
    find_record(daily_log, today)
        .cloned()
        .unwrap_or_else(|| DayRecord::empty(today))
}
