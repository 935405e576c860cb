use clap::{CommandFactory, Parser, Subcommand};
use codefocus_core::{clock, Config};

mod commands;

use commands::Context;

#[derive(Parser)]
#[command(name = "codefocus", version, about = "CodeFocus pomodoro statistics CLI")]
struct Cli {
    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true)]
    date: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derived statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Record timer events
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Timer settings
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
    /// Daily and weekly goals
    Goals {
        #[command(subcommand)]
        action: commands::goals::GoalsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Remove all stored statistics, tasks, settings and goals
    Reset,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    codefocus_core::logging::init(&config.logging);

    let today = match cli.date.as_deref() {
        Some(key) => clock::parse_date_key(key)?,
        None => clock::today(),
    };
    let ctx = Context { today, config };

    match cli.command {
        Commands::Stats { action } => commands::stats::run(action, &ctx),
        Commands::Session { action } => commands::session::run(action, &ctx),
        Commands::Task { action } => commands::task::run(action, &ctx),
        Commands::Settings { action } => commands::settings::run(action, &ctx),
        Commands::Goals { action } => commands::goals::run(action, &ctx),
        Commands::Config { action } => commands::config::run(action),
        Commands::Reset => commands::reset(&ctx),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "codefocus", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
