//! Export command implementation

use anyhow::{Context as _, Result};

use super::{Context, Session};

/// Print the current snapshot as pretty JSON
pub fn export_command(ctx: &Context) -> Result<()> {
    let session = Session::open(ctx)?;
    let json = session
        .snapshot()
        .to_json_pretty()
        .context("Failed to serialize snapshot")?;
    println!("{json}");
    session.close()
}
