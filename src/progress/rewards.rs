//! XP rewards for user actions
//!
//! Every action earns XP in exactly one category. Amounts are configurable
//! through the `[rewards]` section of the config file.

use serde::{Deserialize, Serialize};

use super::activity::ActivityKind;
use super::category::Category;

/// Goal priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl GoalPriority {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// Something the user did that earns category XP
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    SubjectAdded,
    /// A test result; the score bonus needs both score and max score
    TestRecorded {
        score: Option<f64>,
        max_score: Option<f64>,
    },
    GoalCreated,
    GoalCompleted {
        priority: GoalPriority,
    },
    BookAdded,
    ReadingProgress,
    BookRated {
        previous: u8,
        rating: u8,
    },
    PlatformTracked,
    EventScheduled,
    EventCompleted,
}

impl Action {
    pub fn category(&self) -> Category {
        match self {
            Self::SubjectAdded | Self::TestRecorded { .. } => Category::Academics,
            Self::GoalCreated | Self::GoalCompleted { .. } => Category::Goals,
            Self::BookAdded | Self::ReadingProgress | Self::BookRated { .. } => Category::Books,
            Self::PlatformTracked => Category::SocialMedia,
            Self::EventScheduled | Self::EventCompleted => Category::Timetable,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::SubjectAdded => "subject added".to_string(),
            Self::TestRecorded { .. } => "test recorded".to_string(),
            Self::GoalCreated => "goal created".to_string(),
            Self::GoalCompleted { priority } => format!("{priority:?} priority goal completed"),
            Self::BookAdded => "book added".to_string(),
            Self::ReadingProgress => "reading progress".to_string(),
            Self::BookRated { .. } => "book rated".to_string(),
            Self::PlatformTracked => "platform tracked".to_string(),
            Self::EventScheduled => "event scheduled".to_string(),
            Self::EventCompleted => "event completed".to_string(),
        }
    }
}

/// XP amounts per action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardTable {
    pub subject_added: u64,
    pub test_recorded: u64,
    /// Bonus for scoring at least 90% / 80% / 70% / 60%
    pub score_bonuses: [u64; 4],
    pub goal_created: u64,
    pub goal_low: u64,
    pub goal_medium: u64,
    pub goal_high: u64,
    pub book_added: u64,
    pub reading_progress: u64,
    pub rating_raised: u64,
    pub platform_tracked: u64,
    pub event_scheduled: u64,
    pub event_completed: u64,
    pub habit_completed: u64,
    pub hobby_completed: u64,
    /// Lifetime XP granted when a "complete now" levels up a habit
    pub habit_level_bonus: u64,
    /// Lifetime XP granted when a "complete now" levels up a hobby
    pub hobby_level_bonus: u64,
}

impl Default for RewardTable {
    fn default() -> Self {
        Self {
            subject_added: 10,
            test_recorded: 5,
            score_bonuses: [20, 15, 10, 5],
            goal_created: 10,
            goal_low: 10,
            goal_medium: 20,
            goal_high: 30,
            book_added: 10,
            reading_progress: 5,
            rating_raised: 5,
            platform_tracked: 5,
            event_scheduled: 5,
            event_completed: 15,
            habit_completed: 20,
            hobby_completed: 30,
            habit_level_bonus: 50,
            hobby_level_bonus: 75,
        }
    }
}

impl RewardTable {
    /// Total XP an action earns in its category
    pub fn xp_for(&self, action: &Action) -> u64 {
        match *action {
            Action::SubjectAdded => self.subject_added,
            Action::TestRecorded { score, max_score } => {
                self.test_recorded.saturating_add(self.score_bonus(score, max_score))
            }
            Action::GoalCreated => self.goal_created,
            Action::GoalCompleted { priority } => match priority {
                GoalPriority::Low => self.goal_low,
                GoalPriority::Medium => self.goal_medium,
                GoalPriority::High => self.goal_high,
            },
            Action::BookAdded => self.book_added,
            Action::ReadingProgress => self.reading_progress,
            Action::BookRated { previous, rating } => {
                if rating > previous {
                    self.rating_raised
                } else {
                    0
                }
            }
            Action::PlatformTracked => self.platform_tracked,
            Action::EventScheduled => self.event_scheduled,
            Action::EventCompleted => self.event_completed,
        }
    }

    /// Bonus for a test score; nothing without a positive max score
    pub fn score_bonus(&self, score: Option<f64>, max_score: Option<f64>) -> u64 {
        let (Some(score), Some(max)) = (score, max_score) else {
            return 0;
        };
        if max <= 0.0 {
            return 0;
        }

        let percent = score * 100.0 / max;
        let [ninety, eighty, seventy, sixty] = self.score_bonuses;
        if percent >= 90.0 {
            ninety
        } else if percent >= 80.0 {
            eighty
        } else if percent >= 70.0 {
            seventy
        } else if percent >= 60.0 {
            sixty
        } else {
            0
        }
    }

    /// XP for completing a habit or hobby
    pub fn completion(&self, kind: ActivityKind) -> u64 {
        match kind {
            ActivityKind::Habit => self.habit_completed,
            ActivityKind::Hobby => self.hobby_completed,
        }
    }

    /// Lifetime bonus when a "complete now" levels the item up
    pub fn level_bonus(&self, kind: ActivityKind) -> u64 {
        match kind {
            ActivityKind::Habit => self.habit_level_bonus,
            ActivityKind::Hobby => self.hobby_level_bonus,
        }
    }
}
