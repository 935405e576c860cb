//! User tasks.
//!
//! Tasks live alongside the statistics in the persisted state but are not
//! read by the statistics engine; the only coupling is that completing a
//! focus interval bumps the active task's `completed_pomodoros`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub estimated_pomodoros: u32,
    pub completed_pomodoros: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by the user when creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub estimated_pomodoros: u32,
    pub note: Option<String>,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>, estimated_pomodoros: u32) -> Self {
        Self {
            title: title.into(),
            estimated_pomodoros,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_title(&self.title)?;
        validate_estimate(self.estimated_pomodoros)
    }
}

/// Partial edit of a task. `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub estimated_pomodoros: Option<u32>,
    /// `Some("")` clears the note.
    pub note: Option<String>,
    pub completed: Option<bool>,
}

impl TaskUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(estimate) = self.estimated_pomodoros {
            validate_estimate(estimate)?;
        }
        Ok(())
    }

    pub fn apply(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.trim().to_string();
        }
        if let Some(estimate) = self.estimated_pomodoros {
            task.estimated_pomodoros = estimate;
        }
        if let Some(note) = &self.note {
            task.note = normalize_note(Some(note.clone()));
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
    }
}

impl Task {
    /// Create a task from a draft with a fresh id and no progress.
    pub fn new(draft: TaskDraft) -> Self {
        Self::with_created_at(draft, Utc::now())
    }

    pub fn with_created_at(draft: TaskDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: draft.title.trim().to_string(),
            estimated_pomodoros: draft.estimated_pomodoros,
            completed_pomodoros: 0,
            note: normalize_note(draft.note),
            completed: false,
            created_at,
        }
    }

    /// Pomodoros still estimated; zero once the estimate is met.
    pub fn remaining_pomodoros(&self) -> u32 {
        self.estimated_pomodoros.saturating_sub(self.completed_pomodoros)
    }
}

fn normalize_note(note: Option<String>) -> Option<String> {
    note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "title".to_string(),
            message: "title must not be empty".to_string(),
        });
    }
    Ok(())
}

fn validate_estimate(estimate: u32) -> Result<(), ValidationError> {
    if estimate == 0 {
        return Err(ValidationError::InvalidValue {
            field: "estimatedPomodoros".to_string(),
            message: "estimate must be at least 1".to_string(),
        });
    }
    Ok(())
}
