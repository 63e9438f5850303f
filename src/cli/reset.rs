//! Reset command implementation

use anyhow::{Context as _, Result};
use std::io::{BufRead, Write};

use super::{Context, Session};

pub fn reset_command(ctx: &Context, yes: bool) -> Result<()> {
    let session = Session::open(ctx)?;

    if !yes {
        print!(
            "Delete all progress for user '{}'? [y/N] ",
            session.user_id
        );
        std::io::stdout().flush()?;
        let mut answer = String::new();
        std::io::stdin().lock().read_line(&mut answer)?;
        if !matches!(answer.trim(), "y" | "Y" | "yes") {
            println!("Aborted.");
            return session.close();
        }
    }

    let existed = session
        .store()
        .delete(&session.user_id)
        .with_context(|| format!("Failed to delete progress for user '{}'", session.user_id))?;
    if existed {
        println!("Progress for '{}' deleted.", session.user_id);
    } else {
        println!("No stored progress for '{}'.", session.user_id);
    }
    session.close()
}
