//! Events reported by tracker operations

use std::fmt;

use super::achievements::Achievement;
use super::activity::ActivityKind;
use super::category::Category;
use super::levels::level_up_message;

/// Whose ledger moved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XpTarget {
    Category(Category),
    Activity {
        kind: ActivityKind,
        id: String,
        name: String,
    },
    /// Lifetime player total only
    Player,
}

impl fmt::Display for XpTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category(category) => write!(f, "{}", category.label()),
            Self::Activity { kind, name, .. } => write!(f, "{kind} '{name}'"),
            Self::Player => write!(f, "player"),
        }
    }
}

/// A level change on one ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelUp {
    pub target: XpTarget,
    pub old_level: u32,
    pub new_level: u32,
}

/// Events that can happen while applying an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    XpAwarded {
        target: XpTarget,
        amount: u64,
        reason: String,
    },
    XpDeducted {
        target: XpTarget,
        amount: u64,
        reason: String,
    },
    LevelUp(LevelUp),
    LevelDown(LevelUp),
    StreakChanged {
        target: XpTarget,
        streak: u32,
    },
    AchievementUnlocked(&'static Achievement),
    OverallLevelChanged {
        old_level: u32,
        new_level: u32,
        title: &'static str,
    },
}

impl fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::XpAwarded {
                target,
                amount,
                reason,
            } => write!(f, "+{amount} XP to {target} ({reason})"),
            Self::XpDeducted {
                target,
                amount,
                reason,
            } => write!(f, "-{amount} XP from {target} ({reason})"),
            Self::LevelUp(up) => write!(
                f,
                "{} reached level {} (was {}). {}",
                up.target,
                up.new_level,
                up.old_level,
                level_up_message(up.new_level)
            ),
            Self::LevelDown(down) => write!(
                f,
                "{} dropped to level {} (was {})",
                down.target, down.new_level, down.old_level
            ),
            Self::StreakChanged { target, streak } => {
                write!(f, "{target} streak is now {streak}")
            }
            Self::AchievementUnlocked(achievement) => write!(
                f,
                "Achievement unlocked: {} {} - {} (+{} XP)",
                achievement.icon, achievement.name, achievement.description, achievement.xp_reward
            ),
            Self::OverallLevelChanged {
                old_level,
                new_level,
                title,
            } => write!(f, "Overall level {old_level} -> {new_level}: {title}"),
        }
    }
}
