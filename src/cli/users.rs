//! Users command implementation

use anyhow::{Context as _, Result};

use super::session::open_configured_store;
use super::Context;

/// List every user id with a saved snapshot
pub fn users_command(ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;
    let store = open_configured_store(&config)?;
    let ids = store.user_ids().context("Failed to list users")?;

    if ids.is_empty() {
        println!("No stored progress.");
    }
    for id in &ids {
        let marker = if *id == config.settings.user_id { "*" } else { " " };
        println!("{marker} {id}");
    }
    store.close().context("Failed to close store")
}
