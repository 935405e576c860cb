//! The full persisted application state and the operations a front-end
//! performs on it between `load` and `save`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::settings::Settings;
use crate::stats::{
    apply_completed_pomodoro, apply_skipped_pomodoro, compute_focus_score, compute_goal_progress,
    compute_level, format_total_time, is_streak_record, today_record, AggregateStats, DayRecord,
    GoalProgress, Goals, Level, TotalTime,
};
use crate::task::{Task, TaskDraft, TaskUpdate};

/// Schema version written with every save.
pub const CURRENT_VERSION: u32 = 1;

/// Durable snapshot: always saved whole.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersistedState {
    pub stats: AggregateStats,
    pub tasks: Vec<Task>,
    pub settings: Settings,
    pub goals: Goals,
    pub version: u32,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            stats: AggregateStats::default(),
            tasks: Vec::new(),
            settings: Settings::default(),
            goals: Goals::default(),
            version: CURRENT_VERSION,
        }
    }
}

impl PersistedState {
    /// Fold in one completed focus interval of `focus_minutes` (the duration
    /// that actually elapsed) and credit the active task, if any.
    pub fn record_completed(&mut self, focus_minutes: u32, active_task: Option<&str>, today: NaiveDate) {
        self.stats = apply_completed_pomodoro(&self.stats, focus_minutes, today);
        if let Some(id) = active_task {
            // A stale active-task id is not an error: the task may have been
            // deleted while the timer ran.
            let _ = self.complete_task_pomodoro(id);
        }
    }

    pub fn record_skipped(&mut self, today: NaiveDate) {
        self.stats = apply_skipped_pomodoro(&self.stats, today);
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn task_mut(&mut self, id: &str) -> Result<&mut Task, ValidationError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| ValidationError::TaskNotFound(id.to_string()))
    }

    /// Validate and append a new task, returning its id.
    pub fn add_task(&mut self, draft: TaskDraft) -> Result<String, ValidationError> {
        draft.validate()?;
        let task = Task::new(draft);
        let id = task.id.clone();
        self.tasks.push(task);
        Ok(id)
    }

    pub fn update_task(&mut self, id: &str, update: &TaskUpdate) -> Result<&Task, ValidationError> {
        update.validate()?;
        let task = self.task_mut(id)?;
        update.apply(task);
        Ok(task)
    }

    pub fn delete_task(&mut self, id: &str) -> Result<Task, ValidationError> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| ValidationError::TaskNotFound(id.to_string()))?;
        Ok(self.tasks.remove(idx))
    }

    pub fn toggle_task_complete(&mut self, id: &str) -> Result<bool, ValidationError> {
        let task = self.task_mut(id)?;
        task.completed = !task.completed;
        Ok(task.completed)
    }

    pub fn complete_task_pomodoro(&mut self, id: &str) -> Result<u32, ValidationError> {
        let task = self.task_mut(id)?;
        task.completed_pomodoros += 1;
        Ok(task.completed_pomodoros)
    }

    pub fn set_goals(&mut self, goals: Goals) -> Result<(), ValidationError> {
        goals.validate()?;
        self.goals = goals;
        Ok(())
    }
}

/// Everything the UI reads for the current day, computed in one pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub date: NaiveDate,
    pub today: DayRecord,
    pub focus_score: u32,
    pub level: Level,
    pub goal_progress: GoalProgress,
    pub total_time: TotalTime,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_pomodoros: u64,
    pub is_streak_record: bool,
}

impl Dashboard {
    /// The stored `current_streak` is used as-is, matching what the UI shows
    /// between mutations.
    pub fn compute(state: &PersistedState, today: NaiveDate) -> Self {
        let stats = &state.stats;
        let record = today_record(&stats.daily_stats, today);
        Self {
            date: today,
            focus_score: compute_focus_score(&record, stats.current_streak),
            today: record,
            level: compute_level(stats.total_focus_minutes),
            goal_progress: compute_goal_progress(&stats.daily_stats, &state.goals, today),
            total_time: format_total_time(stats.total_focus_minutes),
            current_streak: stats.current_streak,
            longest_streak: stats.longest_streak,
            total_pomodoros: stats.total_pomodoros,
            is_streak_record: is_streak_record(stats.current_streak, stats.longest_streak),
        }
    }
}

/// End-of-session summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionReport {
    pub completed_tasks: usize,
    pub total_tasks: usize,
    pub total_time: TotalTime,
}

impl SessionReport {
    pub fn from_state(state: &PersistedState) -> Self {
        Self {
            completed_tasks: state.tasks.iter().filter(|t| t.completed).count(),
            total_tasks: state.tasks.len(),
            total_time: format_total_time(state.stats.total_focus_minutes),
        }
    }
}
