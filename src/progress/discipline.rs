//! Social media discipline score
//!
//! Scores how well usage stays under each platform's daily limit.

use serde::{Deserialize, Serialize};

/// Today's usage of one platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformUsage {
    /// Seconds used today
    pub usage_today: u64,
    /// Daily limit in minutes
    pub time_limit: u64,
}

/// Discipline score in 0..=100; 0 when nothing is tracked
pub fn discipline_score(platforms: &[PlatformUsage]) -> u32 {
    if platforms.is_empty() {
        return 0;
    }

    let total: f64 = platforms
        .iter()
        .map(|p| {
            let limit_secs = p.time_limit.max(1).saturating_mul(60) as f64;
            let percent = p.usage_today as f64 * 100.0 / limit_secs;
            if percent <= 100.0 {
                100.0 - percent
            } else {
                -(percent - 100.0) * 0.5
            }
        })
        .sum();

    let normalized = (total / platforms.len() as f64).clamp(0.0, 100.0);
    normalized.round() as u32
}

/// Rank shown next to a discipline score
pub fn discipline_rank(score: u32) -> &'static str {
    match score {
        90.. => "Master",
        75..=89 => "Expert",
        60..=74 => "Adept",
        40..=59 => "Novice",
        _ => "Beginner",
    }
}
