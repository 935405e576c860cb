pub mod config;
pub mod goals;
pub mod session;
pub mod settings;
pub mod stats;
pub mod task;

use chrono::NaiveDate;
use codefocus_core::{Config, Database, StateStore};
use serde::Serialize;

/// Per-invocation inputs shared by every state-touching command.
pub struct Context {
    pub today: NaiveDate,
    pub config: Config,
}

impl Context {
    pub fn store(&self) -> StateStore<Database> {
        StateStore::open(&self.config)
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn reset(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = ctx.store();
    store.try_reset()?;
    print_json(&serde_json::json!({ "reset": true }))
}
