//! Level curve and titles
//!
//! Thresholds grow by a factor of 1.5 (floored) per level. The overall
//! player level maps to a title through fixed breakpoints.

use serde::{Deserialize, Serialize};

use super::ledger::{CATEGORY_BASE_XP, ITEM_BASE_XP};

/// Title breakpoint
#[derive(Debug, Clone)]
pub struct TitleTier {
    pub min_level: u32,
    pub title: &'static str,
}

/// Title breakpoints (must be sorted by min_level)
pub static TITLES: &[TitleTier] = &[
    TitleTier {
        min_level: 1,
        title: "Noob Idiot",
    },
    TitleTier {
        min_level: 2,
        title: "Beginner Adventurer",
    },
    TitleTier {
        min_level: 3,
        title: "Novice Explorer",
    },
    TitleTier {
        min_level: 5,
        title: "Skilled Tracker",
    },
    TitleTier {
        min_level: 7,
        title: "Master Achiever",
    },
    TitleTier {
        min_level: 10,
        title: "GOATED",
    },
];

static LEVEL_UP_MESSAGES: &[&str] = &[
    "You leveled up! Keep pushing forward!",
    "Level up! You're making great progress!",
    "Congratulations on reaching the next level!",
    "You're unstoppable! Another level conquered!",
    "Level up! Your dedication is paying off!",
    "Amazing work! You've reached a new milestone!",
    "You're on fire! Keep that momentum going!",
    "Level up! You're becoming a master!",
    "Incredible achievement! New level unlocked!",
    "GOATED STATUS ACHIEVED! You're legendary!",
];

/// Title for an overall level
pub fn title_for_level(level: u32) -> &'static str {
    TITLES
        .iter()
        .rev()
        .find(|t| level >= t.min_level)
        .unwrap_or(&TITLES[0])
        .title
}

/// Message shown when reaching `level`
pub fn level_up_message(level: u32) -> &'static str {
    let index = (level.max(1) as usize - 1).min(LEVEL_UP_MESSAGES.len() - 1);
    LEVEL_UP_MESSAGES[index]
}

/// floor(threshold * 1.5)
pub fn grow_threshold(threshold: u64) -> u64 {
    threshold.saturating_add(threshold / 2)
}

/// floor(threshold / 1.5)
pub fn shrink_threshold(threshold: u64) -> u64 {
    threshold / 3 * 2 + threshold % 3 * 2 / 3
}

/// Threshold that ends `level`, following the same floored steps a ledger takes
pub fn threshold_for_level(level: u32, base_xp: u64) -> u64 {
    (1..level.max(1)).fold(base_xp.max(1), |t, _| grow_threshold(t))
}

/// XP needed from a fresh ledger to reach `target_level`
pub fn total_xp_for_level(target_level: u32, base_xp: u64) -> u64 {
    (1..target_level)
        .map(|level| threshold_for_level(level, base_xp))
        .fold(0u64, u64::saturating_add)
}

/// Starting thresholds for fresh ledgers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelCurve {
    /// First threshold for habits and hobbies
    pub habit_base_xp: u64,
    /// First threshold for the five categories
    pub category_base_xp: u64,
}

impl Default for LevelCurve {
    fn default() -> Self {
        Self {
            habit_base_xp: ITEM_BASE_XP,
            category_base_xp: CATEGORY_BASE_XP,
        }
    }
}
