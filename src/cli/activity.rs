//! Habit and hobby commands

use anyhow::{anyhow, Context as _, Result};
use chrono::{NaiveDate, Utc};

use questlog::progress::{ActivityKind, DATE_FORMAT};

use super::session::print_events;
use super::{Context, Session};
use crate::commands::ActivityCommands;

fn resolve(session: &Session, kind: ActivityKind, item: &str) -> Result<String> {
    session
        .tracker
        .resolve_activity(kind, item)
        .ok_or_else(|| anyhow!("No {kind} matches '{item}' (use `{kind} list` to see IDs)"))
}

pub fn activity_command(ctx: &Context, kind: ActivityKind, command: ActivityCommands) -> Result<()> {
    let mut session = Session::open(ctx)?;

    match command {
        ActivityCommands::Add { name } => {
            let activity = session.tracker.add_activity(kind, &name);
            println!("Added {kind} '{}' ({})", activity.name, activity.id);
        }
        ActivityCommands::Toggle { item, date } => {
            let now = Utc::now();
            let date = match date {
                Some(d) => NaiveDate::parse_from_str(&d, DATE_FORMAT)
                    .with_context(|| format!("Invalid date '{d}', expected YYYY-MM-DD"))?,
                None => now.date_naive(),
            };
            let id = resolve(&session, kind, &item)?;
            let events = session
                .tracker
                .toggle_activity(kind, &id, date, now)
                .ok_or_else(|| anyhow!("No {kind} with id {id}"))?;
            print_events(&events);
        }
        ActivityCommands::Complete { item } => {
            let id = resolve(&session, kind, &item)?;
            let events = session
                .tracker
                .complete_activity(kind, &id, Utc::now())
                .ok_or_else(|| anyhow!("No {kind} with id {id}"))?;
            print_events(&events);
        }
        ActivityCommands::Remove { item } => {
            let id = resolve(&session, kind, &item)?;
            let removed = session
                .tracker
                .remove_activity(kind, &id)
                .ok_or_else(|| anyhow!("No {kind} with id {id}"))?;
            println!("Removed {kind} '{}'", removed.name);
        }
        ActivityCommands::List { json } => {
            let items = session.tracker.activities(kind);
            if json {
                println!("{}", serde_json::to_string_pretty(items)?);
            } else if items.is_empty() {
                println!("No {kind}s tracked.");
            } else {
                let today = Utc::now().date_naive();
                for item in items {
                    let mark = if item.is_completed_on(today) { "x" } else { " " };
                    println!(
                        "  [{mark}] {}  {:<20} level {} ({}/{} XP)  streak {}",
                        item.short_id(),
                        item.name,
                        item.ledger.level,
                        item.ledger.xp,
                        item.ledger.next_level_xp,
                        item.streak
                    );
                }
            }
            return session.close();
        }
    }

    session.save()
}
