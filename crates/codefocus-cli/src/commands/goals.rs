use clap::Subcommand;
use codefocus_core::Goals;

use super::{print_json, Context};

#[derive(Subcommand)]
pub enum GoalsAction {
    /// Show configured goals
    Show,
    /// Set one or both targets, keeping the other
    Set {
        /// Completed pomodoros per day
        #[arg(long)]
        daily: Option<u32>,
        /// Completed pomodoros per week (Sunday to Saturday)
        #[arg(long)]
        weekly: Option<u32>,
    },
    /// Disable both goals
    Clear,
}

pub fn run(action: GoalsAction, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = ctx.store();
    let mut state = store.load();

    match action {
        GoalsAction::Show => print_json(&state.goals),
        GoalsAction::Set { daily, weekly } => {
            let goals = Goals {
                daily_pomodoros: daily.or(state.goals.daily_pomodoros),
                weekly_pomodoros: weekly.or(state.goals.weekly_pomodoros),
            };
            state.set_goals(goals)?;
            store.try_save(&state)?;
            print_json(&state.goals)
        }
        GoalsAction::Clear => {
            state.set_goals(Goals::default())?;
            store.try_save(&state)?;
            print_json(&state.goals)
        }
    }
}
