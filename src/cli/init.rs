//! Init command implementation

use anyhow::{bail, Context as _, Result};

use questlog::config::Config;

use super::Context;

/// Write a default config file
pub fn init_command(ctx: &Context, force: bool) -> Result<()> {
    let config_path = ctx
        .config_path
        .clone()
        .unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    Config::default()
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("Created: {}", config_path.display());

    Ok(())
}
