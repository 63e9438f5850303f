//! Reward-table actions

use anyhow::{anyhow, bail, Result};

use questlog::progress::{Action, GoalPriority};

use super::session::print_events;
use super::{Context, Session};
use crate::commands::RecordCommands;

fn to_action(command: RecordCommands) -> Result<Action> {
    let action = match command {
        RecordCommands::Subject => Action::SubjectAdded,
        RecordCommands::Test { score, max } => Action::TestRecorded {
            score,
            max_score: max,
        },
        RecordCommands::GoalCreated => Action::GoalCreated,
        RecordCommands::GoalCompleted { priority } => Action::GoalCompleted {
            priority: GoalPriority::from_str(&priority)
                .ok_or_else(|| anyhow!("Unknown priority: {priority} (expected low, medium or high)"))?,
        },
        RecordCommands::Book => Action::BookAdded,
        RecordCommands::Reading => Action::ReadingProgress,
        RecordCommands::Rating { old, new } => {
            if new > 5 {
                bail!("Ratings go from 0 to 5, got {new}");
            }
            Action::BookRated {
                previous: old,
                rating: new,
            }
        }
        RecordCommands::Platform => Action::PlatformTracked,
        RecordCommands::Event => Action::EventScheduled,
        RecordCommands::EventCompleted => Action::EventCompleted,
    };
    Ok(action)
}

pub fn record_command(ctx: &Context, command: RecordCommands) -> Result<()> {
    let action = to_action(command)?;

    let mut session = Session::open(ctx)?;
    let events = session.tracker.record(action);
    print_events(&events);
    session.save()
}
