//! Personal records: best day and best Sunday-started week.

use indexmap::IndexMap;

use super::daily::{BestDay, BestWeek, DayRecord, PersonalRecords};
use crate::clock::week_start;

/// Best day and best week by completed pomodoros.
///
/// Ties go to whichever day (or week) appears first in log order. Either
/// record is `None` when nothing was ever completed.
pub fn compute_personal_records(daily_log: &[DayRecord]) -> PersonalRecords {
    let mut best_day: Option<BestDay> = None;
    for record in daily_log {
        let current = best_day.as_ref().map_or(0, |b| b.pomodoros);
        if record.completed_pomodoros > current {
            best_day = Some(BestDay {
                date: record.date,
                pomodoros: record.completed_pomodoros,
            });
        }
    }

    // Insertion order keeps the first-seen tie-break for weeks.
    let mut weeks: IndexMap<_, u32> = IndexMap::new();
    for record in daily_log {
        *weeks.entry(week_start(record.date)).or_insert(0) += record.completed_pomodoros;
    }

    let mut best_week: Option<BestWeek> = None;
    for (start_date, pomodoros) in weeks {
        if pomodoros > best_week.as_ref().map_or(0, |b| b.pomodoros) {
            best_week = Some(BestWeek {
                start_date,
                pomodoros,
            });
        }
    }

    PersonalRecords {
        best_day,
        best_week,
    }
}
