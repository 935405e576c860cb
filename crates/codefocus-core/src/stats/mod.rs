//! Statistics module for CodeFocus
//!
//! Pure derivations over the daily activity log (streaks, personal records,
//! focus score, level, goal progress, heatmap) and the two mutation functions
//! that fold timer events into the aggregate rollup. Nothing here touches the
//! clock or storage: "today" is always passed in.

mod daily;
mod goals;
mod heatmap;
mod mutation;
mod records;
mod score;
mod streak;

pub use daily::{today_record, AggregateStats, BestDay, BestWeek, DayRecord, PersonalRecords};

pub use goals::{compute_goal_progress, GoalProgress, GoalStatus, Goals};

pub use heatmap::{generate_heatmap, heat_level, render_heatmap, HeatmapCell, HEATMAP_LOOKBACK_DAYS};

pub use mutation::{apply_completed_pomodoro, apply_skipped_pomodoro};

pub use records::compute_personal_records;

pub use score::{compute_focus_score, compute_level, format_total_time, Level, LevelName, TotalTime};

pub use streak::{compute_streak, is_streak_record};
