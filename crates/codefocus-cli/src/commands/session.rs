//! Timer events: the front-end calls these when an interval ends.

use clap::Subcommand;
use codefocus_core::{today_record, Dashboard, ValidationError};
use serde_json::json;

use super::{print_json, Context};

#[derive(Subcommand)]
pub enum SessionAction {
    /// Record a completed focus interval
    Complete {
        /// Minutes actually focused (default: the pomodoro setting)
        #[arg(long)]
        minutes: Option<u32>,
        /// Credit this task with the pomodoro
        #[arg(long)]
        task: Option<String>,
    },
    /// Record a skipped focus interval
    Skip,
}

pub fn run(action: SessionAction, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = ctx.store();
    let mut state = store.load();

    match action {
        SessionAction::Complete { minutes, task } => {
            if let Some(id) = task.as_deref() {
                if state.task(id).is_none() {
                    return Err(ValidationError::TaskNotFound(id.to_string()).into());
                }
            }
            let minutes = minutes.unwrap_or(state.settings.pomodoro);
            state.record_completed(minutes, task.as_deref(), ctx.today);
            store.try_save(&state)?;

            let completed_today = today_record(&state.stats.daily_stats, ctx.today).completed_pomodoros;
            let next = state.settings.break_after(completed_today);
            tracing::debug!(minutes, completed_today, ?next, "completed pomodoro recorded");
            print_json(&json!({
                "dashboard": Dashboard::compute(&state, ctx.today),
                "nextMode": next,
                "nextMinutes": state.settings.duration_minutes(next),
            }))
        }
        SessionAction::Skip => {
            state.record_skipped(ctx.today);
            store.try_save(&state)?;
            print_json(&json!({ "dashboard": Dashboard::compute(&state, ctx.today) }))
        }
    }
}
