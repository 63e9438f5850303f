//! Raw category XP

use anyhow::{anyhow, Result};

use questlog::progress::Category;

use super::session::print_events;
use super::{Context, Session};

pub fn award_command(ctx: &Context, category: &str, amount: u64, reason: Option<&str>) -> Result<()> {
    let category = Category::from_str(category).ok_or_else(|| {
        anyhow!(
            "Unknown category: {category} (expected one of: {})",
            Category::ALL.map(|c| c.as_str()).join(", ")
        )
    })?;

    let mut session = Session::open(ctx)?;
    let events = session
        .tracker
        .add_xp(category, amount, reason.unwrap_or("manual award"));
    print_events(&events);
    session.save()
}
