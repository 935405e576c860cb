use clap::Subcommand;
use codefocus_core::stats::is_streak_record;
use codefocus_core::{
    compute_goal_progress, compute_level, compute_streak, format_total_time, generate_heatmap,
    render_heatmap, Dashboard,
};
use serde_json::json;

use super::{print_json, Context};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Everything the dashboard shows for today
    Show,
    /// Current and longest streak
    Streak,
    /// Best day and best week
    Records,
    /// Level from lifetime focus time
    Level,
    /// Daily and weekly goal progress
    Goals,
    /// Activity over the last 181 days
    Heatmap {
        /// Print a text grid instead of JSON
        #[arg(long)]
        ascii: bool,
    },
}

pub fn run(action: StatsAction, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let state = ctx.store().load();
    let stats = &state.stats;

    match action {
        StatsAction::Show => print_json(&Dashboard::compute(&state, ctx.today)),
        StatsAction::Streak => print_json(&json!({
            "currentStreak": stats.current_streak,
            "longestStreak": stats.longest_streak,
            "activeStreak": compute_streak(&stats.daily_stats, ctx.today),
            "isRecord": is_streak_record(stats.current_streak, stats.longest_streak),
            "lastActiveDate": stats.last_active_date,
        })),
        StatsAction::Records => print_json(&stats.personal_records),
        StatsAction::Level => print_json(&json!({
            "level": compute_level(stats.total_focus_minutes),
            "totalTime": format_total_time(stats.total_focus_minutes),
        })),
        StatsAction::Goals => print_json(&compute_goal_progress(
            &stats.daily_stats,
            &state.goals,
            ctx.today,
        )),
        StatsAction::Heatmap { ascii } => {
            let cells = generate_heatmap(&stats.daily_stats, ctx.today);
            if ascii {
                print!("{}", render_heatmap(&cells));
                Ok(())
            } else {
                print_json(&cells)
            }
        }
    }
}
