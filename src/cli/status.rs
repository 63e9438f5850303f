//! Status command implementation

use anyhow::Result;

use questlog::progress::{discipline_rank, Achievement, AchievementId, Activity, Category, XpLedger};

use super::{Context, Session};

fn ledger_line(ledger: &XpLedger) -> String {
    format!(
        "level {:>2}  {:>5}/{:<5} XP  {:>3.0}%",
        ledger.level,
        ledger.xp,
        ledger.next_level_xp,
        ledger.progress_to_next() * 100.0
    )
}

fn print_activities(heading: &str, items: &[Activity]) {
    if items.is_empty() {
        return;
    }
    println!("\n{heading} ({}):", items.len());
    for item in items {
        println!(
            "  {:<20} {}  streak {}",
            item.name,
            ledger_line(&item.ledger),
            item.streak
        );
    }
}

/// Show player standing plus every ledger
pub fn status_command(ctx: &Context, json: bool) -> Result<()> {
    let session = Session::open(ctx)?;
    let tracker = &session.tracker;

    if json {
        let categories: serde_json::Map<String, serde_json::Value> = tracker
            .categories()
            .iter()
            .map(|(category, progress)| {
                (
                    category.as_str().to_string(),
                    serde_json::json!({
                        "level": progress.ledger.level,
                        "xp": progress.ledger.xp,
                        "nextLevelXP": progress.ledger.next_level_xp,
                    }),
                )
            })
            .collect();
        let out = serde_json::json!({
            "user": session.user_id,
            "player": tracker.player(),
            "categories": categories,
            "disciplineScore": tracker.discipline_score(),
            "habits": tracker.habits(),
            "hobbies": tracker.hobbies(),
            "achievements": tracker.unlocked_achievements(),
            "savedAt": session.saved_at,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return session.close();
    }

    let player = tracker.player();
    println!("{} - level {} {}", session.user_id, player.level, player.title);
    println!("Lifetime XP: {}\n", player.total_xp);

    for (category, progress) in tracker.categories().iter() {
        println!("  {:<24} {}", category.label(), ledger_line(&progress.ledger));
        if category == Category::SocialMedia {
            let score = tracker.discipline_score();
            if score > 0 {
                println!("  {:<24} {score} ({})", "", discipline_rank(score));
            }
        }
    }

    print_activities("Habits", tracker.habits());
    print_activities("Hobbies", tracker.hobbies());

    if !tracker.unlocked_achievements().is_empty() {
        println!("\nAchievements:");
        for id in tracker.unlocked_achievements() {
            match AchievementId::from_str(id) {
                Some(known) => {
                    let achievement = Achievement::get(known);
                    println!("  {} {}", achievement.icon, achievement.name);
                }
                None => println!("  {id}"),
            }
        }
    }

    if let Some(saved_at) = session.saved_at {
        println!("\nLast saved: {}", saved_at.format("%Y-%m-%d %H:%M UTC"));
    }

    session.close()
}
