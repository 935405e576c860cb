//! # CodeFocus Core Library
//!
//! Statistics and persistence for the CodeFocus pomodoro timer. The timer
//! countdown and all rendering belong to the front-end; this crate turns
//! timer events into a daily activity log and derives everything shown from
//! that log.
//!
//! ## Architecture
//!
//! - **Clock**: local calendar-day keys; "today" is always an explicit input
//! - **Statistics**: pure derivations (streak, records, focus score, level,
//!   goals, heatmap) and the completed/skipped mutation functions
//! - **State**: the persisted snapshot `{stats, tasks, settings, goals, version}`
//! - **Storage**: SQLite key-value store, lenient decoding with legacy
//!   migration, and TOML application config
//!
//! ## Key Components
//!
//! - [`StateStore`]: load / save / reset of [`PersistedState`]
//! - [`Dashboard`]: the values a UI reads for the current day
//! - [`apply_completed_pomodoro`] / [`apply_skipped_pomodoro`]: event folding

pub mod clock;
pub mod error;
pub mod logging;
pub mod settings;
pub mod state;
pub mod stats;
pub mod storage;
pub mod task;

pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use settings::{Settings, TimerMode};
pub use state::{Dashboard, PersistedState, SessionReport, CURRENT_VERSION};
pub use stats::{
    apply_completed_pomodoro, apply_skipped_pomodoro, compute_focus_score, compute_goal_progress,
    compute_level, compute_personal_records, compute_streak, format_total_time, generate_heatmap,
    render_heatmap, today_record, AggregateStats, BestDay, BestWeek, DayRecord, GoalProgress,
    GoalStatus, Goals, HeatmapCell, Level, LevelName, PersonalRecords, TotalTime,
};
pub use storage::{Config, Database, KeyValueStore, MemoryStore, StateStore};
pub use task::{Task, TaskDraft, TaskUpdate};
