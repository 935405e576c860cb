//! Task management commands for CLI.

use clap::Subcommand;
use codefocus_core::{SessionReport, TaskDraft, TaskUpdate, ValidationError};
use serde_json::json;

use super::{print_json, Context};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a new task
    Add {
        /// Task title
        title: String,
        /// Estimated pomodoros (default: 1)
        #[arg(long, default_value = "1")]
        estimate: u32,
        /// Free-form note
        #[arg(long)]
        note: Option<String>,
    },
    /// List tasks with a session summary
    List,
    /// Update a task
    Update {
        /// Task ID
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New estimated pomodoros
        #[arg(long)]
        estimate: Option<u32>,
        /// New note; an empty string clears it
        #[arg(long)]
        note: Option<String>,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
    /// Flip a task between open and completed
    Toggle {
        /// Task ID
        id: String,
    },
}

pub fn run(action: TaskAction, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = ctx.store();
    let mut state = store.load();

    match action {
        TaskAction::Add {
            title,
            estimate,
            note,
        } => {
            let mut draft = TaskDraft::new(title, estimate);
            if let Some(note) = note {
                draft = draft.with_note(note);
            }
            let id = state.add_task(draft)?;
            store.try_save(&state)?;
            print_json(&state.task(&id))
        }
        TaskAction::List => print_json(&json!({
            "tasks": state.tasks,
            "summary": SessionReport::from_state(&state),
        })),
        TaskAction::Update {
            id,
            title,
            estimate,
            note,
        } => {
            let update = TaskUpdate {
                title,
                estimated_pomodoros: estimate,
                note,
                completed: None,
            };
            let task = state.update_task(&id, &update)?.clone();
            store.try_save(&state)?;
            print_json(&task)
        }
        TaskAction::Delete { id } => {
            let task = state.delete_task(&id)?;
            store.try_save(&state)?;
            print_json(&task)
        }
        TaskAction::Toggle { id } => {
            state.toggle_task_complete(&id)?;
            store.try_save(&state)?;
            let task = state
                .task(&id)
                .ok_or_else(|| ValidationError::TaskNotFound(id.clone()))?;
            print_json(task)
        }
    }
}
