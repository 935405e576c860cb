//! Event application over [`AggregateStats`].
//!
//! Both functions take the current rollup by reference and return a new one;
//! the input is never modified.

use chrono::NaiveDate;

use super::daily::{AggregateStats, DayRecord};
use super::records::compute_personal_records;
use super::streak::compute_streak;

/// Copy of the log with `update` applied to today's record, appending a
/// zeroed record first when today has none.
fn with_today(daily_log: &[DayRecord], today: NaiveDate, update: impl FnOnce(&mut DayRecord)) -> Vec<DayRecord> {
    let mut log = daily_log.to_vec();
    let idx = match log.iter().position(|r| r.date == today) {
        Some(idx) => idx,
        None => {
            log.push(DayRecord::empty(today));
            log.len() - 1
        }
    };
    update(&mut log[idx]);
    log
}

/// Record one fully elapsed focus interval of `focus_minutes`.
///
/// Updates today's record, both streaks, lifetime counters, personal records
/// and `last_active_date` together.
pub fn apply_completed_pomodoro(stats: &AggregateStats, focus_minutes: u32, today: NaiveDate) -> AggregateStats {
    let daily_stats = with_today(&stats.daily_stats, today, |record| {
        record.completed_pomodoros += 1;
        record.focus_minutes += focus_minutes;
    });

    let current_streak = compute_streak(&daily_stats, today);
    let personal_records = compute_personal_records(&daily_stats);

    AggregateStats {
        current_streak,
        longest_streak: stats.longest_streak.max(current_streak),
        total_focus_minutes: stats.total_focus_minutes + u64::from(focus_minutes),
        total_pomodoros: stats.total_pomodoros + 1,
        daily_stats,
        last_active_date: Some(today),
        personal_records,
    }
}

/// Record one abandoned focus interval.
///
/// Only today's skip count and `last_active_date` change.
pub fn apply_skipped_pomodoro(stats: &AggregateStats, today: NaiveDate) -> AggregateStats {
    let daily_stats = with_today(&stats.daily_stats, today, |record| {
        record.skipped_pomodoros += 1;
    });

    AggregateStats {
        daily_stats,
        last_active_date: Some(today),
        ..stats.clone()
    }
}
