//! Progression engine: XP ledgers, levels, streaks, and titles
//!
//! User actions become XP in one of five categories (academics, goals,
//! books, social media discipline, timetable) or in a per-item habit/hobby
//! ledger. The overall player level is derived from all of them.
//!
//! # Usage
//!
//! ```ignore
//! let mut tracker = ProgressTracker::default();
//!
//! // Record a completed high-priority goal
//! let events = tracker.record(Action::GoalCompleted { priority: GoalPriority::High });
//!
//! // Toggle a habit for today
//! let id = tracker.add_activity(ActivityKind::Habit, "Read").id.clone();
//! tracker.toggle_activity(ActivityKind::Habit, &id, today, Utc::now());
//! ```

mod achievements;
mod activity;
mod aggregate;
mod category;
mod discipline;
mod events;
mod ledger;
mod levels;
mod rewards;
mod tracker;

pub use achievements::{check_goal_achievements, Achievement, AchievementId, GoalStats, ACHIEVEMENTS};
pub use activity::{Activity, ActivityKind, CompletionEvent, ToggleOutcome, XpChange, DATE_FORMAT};
pub use aggregate::{
    habits_average_level, recompute_overall_level, weighted_floor_level, OverallStanding,
    WeightedLevel,
};
pub use category::{add_category_xp, Category, CategoryBook, CategoryProgress, PlayerRecord};
pub use discipline::{discipline_rank, discipline_score, PlatformUsage};
pub use events::{LevelUp, ProgressEvent, XpTarget};
pub use ledger::{AwardOutcome, DeductOutcome, XpLedger, CATEGORY_BASE_XP, ITEM_BASE_XP};
pub use levels::{
    level_up_message, threshold_for_level, title_for_level, total_xp_for_level, LevelCurve, TitleTier,
    TITLES,
};
pub use rewards::{Action, GoalPriority, RewardTable};
pub use tracker::ProgressTracker;
