use clap::Subcommand;

use super::{print_json, Context};

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Show timer settings
    Show,
    /// Set one setting
    Set {
        /// Setting name (e.g. "shortBreak", "long_break_interval")
        key: String,
        /// New value
        value: String,
    },
}

pub fn run(action: SettingsAction, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = ctx.store();
    let mut state = store.load();

    match action {
        SettingsAction::Show => print_json(&state.settings),
        SettingsAction::Set { key, value } => {
            state.settings.set(&key, &value)?;
            store.try_save(&state)?;
            print_json(&state.settings)
        }
    }
}
