//! Goal achievement commands

use anyhow::{bail, Result};

use questlog::progress::{GoalStats, ACHIEVEMENTS};

use super::session::print_events;
use super::{Context, Session};
use crate::commands::AchievementCommands;

pub fn achievements_command(ctx: &Context, command: Option<AchievementCommands>) -> Result<()> {
    let mut session = Session::open(ctx)?;

    let Some(AchievementCommands::Check {
        total,
        completed,
        high,
        horizons,
    }) = command
    else {
        let unlocked = session.tracker.unlocked_achievements();
        for achievement in ACHIEVEMENTS.iter() {
            let mark = if unlocked.iter().any(|id| id == achievement.id.as_str()) {
                "x"
            } else {
                " "
            };
            println!(
                "  [{mark}] {} {:<20} {} (+{} XP)",
                achievement.icon, achievement.name, achievement.description, achievement.xp_reward
            );
        }
        return session.close();
    };

    let mut stats = GoalStats {
        total_goals: total,
        completed_goals: completed,
        completed_high_priority: high,
        ..GoalStats::default()
    };
    for horizon in &horizons {
        match horizon.to_ascii_lowercase().as_str() {
            "weekly" => stats.has_weekly = true,
            "monthly" => stats.has_monthly = true,
            "yearly" => stats.has_yearly = true,
            "life" => stats.has_life = true,
            other => bail!("Unknown goal horizon: {other} (expected weekly, monthly, yearly or life)"),
        }
    }

    let events = session.tracker.check_goal_achievements(&stats);
    print_events(&events);
    session.save()
}
