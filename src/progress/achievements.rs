//! Goal achievements
//!
//! Unlocked once each; the reward goes to the goals category.

/// Unique identifier for each achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementId {
    GoalSetter,
    AchievementHunter,
    Overachiever,
    MasterPlanner,
    Perfectionist,
}

impl AchievementId {
    /// String ID used in the snapshot
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GoalSetter => "goal_setter",
            Self::AchievementHunter => "achievement_hunter",
            Self::Overachiever => "overachiever",
            Self::MasterPlanner => "master_planner",
            Self::Perfectionist => "perfectionist",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "goal_setter" => Some(Self::GoalSetter),
            "achievement_hunter" => Some(Self::AchievementHunter),
            "overachiever" => Some(Self::Overachiever),
            "master_planner" => Some(Self::MasterPlanner),
            "perfectionist" => Some(Self::Perfectionist),
            _ => None,
        }
    }
}

/// Achievement definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub xp_reward: u64,
}

pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: AchievementId::GoalSetter,
        name: "Goal Setter",
        description: "Set your first goal",
        icon: "🎯",
        xp_reward: 50,
    },
    Achievement {
        id: AchievementId::AchievementHunter,
        name: "Achievement Hunter",
        description: "Complete 5 goals",
        icon: "🏆",
        xp_reward: 100,
    },
    Achievement {
        id: AchievementId::Overachiever,
        name: "Overachiever",
        description: "Complete 10 goals",
        icon: "⭐",
        xp_reward: 200,
    },
    Achievement {
        id: AchievementId::MasterPlanner,
        name: "Master Planner",
        description: "Have goals in all categories",
        icon: "📝",
        xp_reward: 150,
    },
    Achievement {
        id: AchievementId::Perfectionist,
        name: "Perfectionist",
        description: "Complete 3 high priority goals",
        icon: "💯",
        xp_reward: 200,
    },
];

impl Achievement {
    /// Definition for an ID
    pub fn get(id: AchievementId) -> &'static Achievement {
        ACHIEVEMENTS
            .iter()
            .find(|a| a.id == id)
            .unwrap_or(&ACHIEVEMENTS[0])
    }
}

/// Goal counts supplied by whoever owns the goal list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoalStats {
    pub total_goals: u64,
    pub completed_goals: u64,
    pub completed_high_priority: u64,
    pub has_weekly: bool,
    pub has_monthly: bool,
    pub has_yearly: bool,
    pub has_life: bool,
}

impl GoalStats {
    pub fn covers_all_horizons(&self) -> bool {
        self.has_weekly && self.has_monthly && self.has_yearly && self.has_life
    }
}

/// Achievements earned by `stats` that are not yet in `unlocked`
pub fn check_goal_achievements(stats: &GoalStats, unlocked: &[String]) -> Vec<AchievementId> {
    let conditions = [
        (stats.total_goals >= 1, AchievementId::GoalSetter),
        (stats.completed_goals >= 5, AchievementId::AchievementHunter),
        (stats.completed_goals >= 10, AchievementId::Overachiever),
        (stats.covers_all_horizons(), AchievementId::MasterPlanner),
        (stats.completed_high_priority >= 3, AchievementId::Perfectionist),
    ];

    conditions
        .into_iter()
        .filter(|(met, id)| *met && !unlocked.iter().any(|u| u == id.as_str()))
        .map(|(_, id)| id)
        .collect()
}
