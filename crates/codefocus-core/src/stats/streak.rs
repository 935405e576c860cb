//! Consecutive-day streak over the activity log.

use std::collections::HashSet;

use chrono::NaiveDate;

use super::daily::DayRecord;
use crate::clock::previous_day;

/// Count consecutive days with at least one completed pomodoro.
///
/// The walk starts at `today` when today has completions, otherwise at
/// yesterday. A streak survives a missed "today" for exactly one day; with
/// neither today nor yesterday active it is zero.
pub fn compute_streak(daily_log: &[DayRecord], today: NaiveDate) -> u32 {
    let active: HashSet<NaiveDate> = daily_log
        .iter()
        .filter(|r| r.completed_pomodoros > 0)
        .map(|r| r.date)
        .collect();

    let yesterday = previous_day(today);
    let mut cursor = if active.contains(&today) {
        today
    } else if active.contains(&yesterday) {
        yesterday
    } else {
        return 0;
    };

    let mut streak = 0;
    while active.contains(&cursor) {
        streak += 1;
        let prev = previous_day(cursor);
        if prev == cursor {
            break;
        }
        cursor = prev;
    }
    streak
}

/// True when the running streak has caught up with the best one.
pub fn is_streak_record(current_streak: u32, longest_streak: u32) -> bool {
    current_streak > 0 && current_streak >= longest_streak
}
