//! Progress tracker - applies user actions to one user's state
//!
//! Every mutating call returns the events it produced and recomputes the
//! overall player level before returning.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Map;
use tracing::{debug, info};

use super::achievements::{check_goal_achievements, Achievement, GoalStats};
use super::activity::{Activity, ActivityKind, XpChange};
use super::aggregate::{recompute_overall_level, OverallStanding};
use super::category::{add_category_xp, Category, CategoryBook, PlayerRecord};
use super::discipline::{discipline_score, PlatformUsage};
use super::events::{LevelUp, ProgressEvent, XpTarget};
use super::levels::LevelCurve;
use super::rewards::{Action, RewardTable};
use crate::snapshot::{CategoryRecord, DisciplineRecord, Snapshot, SNAPSHOT_VERSION};

/// One user's progress plus the rules used to change it
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    player: PlayerRecord,
    categories: CategoryBook,
    habits: Vec<Activity>,
    hobbies: Vec<Activity>,
    achievements: Vec<String>,
    extra: Map<String, serde_json::Value>,
    rewards: RewardTable,
    curve: LevelCurve,
}

impl ProgressTracker {
    /// Fresh state: every ledger at level 1
    pub fn new(rewards: RewardTable, curve: LevelCurve) -> Self {
        Self {
            player: PlayerRecord::default(),
            categories: CategoryBook::new(&curve),
            habits: Vec::new(),
            hobbies: Vec::new(),
            achievements: Vec::new(),
            extra: Map::new(),
            rewards,
            curve,
        }
    }

    /// Restore from a snapshot by direct assignment.
    ///
    /// Only the derived player level and title are recomputed.
    pub fn from_snapshot(snapshot: Snapshot, rewards: RewardTable, curve: LevelCurve) -> Self {
        let mut categories = CategoryBook::new(&curve);
        categories[Category::Academics] = snapshot.academics.into();
        categories[Category::Goals] = snapshot.goals.into();
        categories[Category::Books] = snapshot.books.into();
        categories[Category::SocialMedia] = snapshot.social_media.into();
        categories[Category::Timetable] = snapshot.timetable.into();

        let mut habits = snapshot.habits;
        let mut hobbies = snapshot.hobbies;
        for item in habits.iter_mut().chain(hobbies.iter_mut()) {
            item.ledger.level = item.ledger.level.max(1);
        }

        let mut tracker = Self {
            player: snapshot.player,
            categories,
            habits,
            hobbies,
            achievements: snapshot.achievements,
            extra: snapshot.extra,
            rewards,
            curve,
        };
        let standing = tracker.standing();
        tracker.player.level = standing.level;
        tracker.player.title = standing.title.to_string();
        tracker
    }

    /// Current state as a snapshot stamped with `now`
    pub fn snapshot(&self, now: DateTime<Utc>) -> Snapshot {
        Snapshot {
            version: SNAPSHOT_VERSION,
            player: self.player.clone(),
            academics: CategoryRecord::from(&self.categories[Category::Academics]),
            goals: CategoryRecord::from(&self.categories[Category::Goals]),
            books: CategoryRecord::from(&self.categories[Category::Books]),
            social_media: DisciplineRecord::from(&self.categories[Category::SocialMedia]),
            timetable: CategoryRecord::from(&self.categories[Category::Timetable]),
            habits: self.habits.clone(),
            hobbies: self.hobbies.clone(),
            achievements: self.achievements.clone(),
            updated_at: Some(now),
            extra: self.extra.clone(),
        }
    }

    pub fn player(&self) -> &PlayerRecord {
        &self.player
    }

    pub fn categories(&self) -> &CategoryBook {
        &self.categories
    }

    pub fn habits(&self) -> &[Activity] {
        &self.habits
    }

    pub fn hobbies(&self) -> &[Activity] {
        &self.hobbies
    }

    pub fn activities(&self, kind: ActivityKind) -> &[Activity] {
        match kind {
            ActivityKind::Habit => &self.habits,
            ActivityKind::Hobby => &self.hobbies,
        }
    }

    fn activities_mut(&mut self, kind: ActivityKind) -> &mut Vec<Activity> {
        match kind {
            ActivityKind::Habit => &mut self.habits,
            ActivityKind::Hobby => &mut self.hobbies,
        }
    }

    pub fn unlocked_achievements(&self) -> &[String] {
        &self.achievements
    }

    pub fn rewards(&self) -> &RewardTable {
        &self.rewards
    }

    /// Overall level and title for the current state
    pub fn standing(&self) -> OverallStanding {
        recompute_overall_level(&self.categories, &self.habits)
    }

    /// Discipline score over the platforms stored with the social media record
    pub fn discipline_score(&self) -> u32 {
        let platforms: Vec<PlatformUsage> = self.categories[Category::SocialMedia]
            .fields
            .get("platforms")
            .and_then(|v| serde_json::from_value(v.clone()).ok())
            .unwrap_or_default();
        discipline_score(&platforms)
    }

    // ========================================
    // CATEGORY XP
    // ========================================

    /// Award raw XP to a category
    pub fn add_xp(&mut self, category: Category, amount: u64, reason: &str) -> Vec<ProgressEvent> {
        let mut events = Vec::new();
        self.award_category(category, amount, reason, &mut events);
        self.recompute(&mut events);
        events
    }

    /// Apply an action from the reward table
    pub fn record(&mut self, action: Action) -> Vec<ProgressEvent> {
        let amount = self.rewards.xp_for(&action);
        let mut events = Vec::new();
        self.award_category(action.category(), amount, &action.describe(), &mut events);
        self.recompute(&mut events);
        events
    }

    /// Unlock any goal achievements `stats` now satisfies and award their XP
    pub fn check_goal_achievements(&mut self, stats: &GoalStats) -> Vec<ProgressEvent> {
        let mut events = Vec::new();
        for id in check_goal_achievements(stats, &self.achievements) {
            let achievement = Achievement::get(id);
            self.achievements.push(id.as_str().to_string());
            info!(achievement = achievement.name, "Achievement unlocked");
            events.push(ProgressEvent::AchievementUnlocked(achievement));
            self.award_category(
                Category::Goals,
                achievement.xp_reward,
                &format!("achievement: {}", achievement.name),
                &mut events,
            );
        }
        self.recompute(&mut events);
        events
    }

    fn award_category(
        &mut self,
        category: Category,
        amount: u64,
        reason: &str,
        events: &mut Vec<ProgressEvent>,
    ) {
        if amount == 0 {
            return;
        }

        let old_level = self.categories[category].level();
        let outcome = add_category_xp(&mut self.categories[category], &mut self.player, amount);
        debug!(%category, amount, reason, lifetime_xp = self.player.total_xp, "Category XP awarded");

        events.push(ProgressEvent::XpAwarded {
            target: XpTarget::Category(category),
            amount,
            reason: reason.to_string(),
        });
        if outcome.leveled_up {
            info!(%category, level = outcome.level, "Category leveled up");
            events.push(ProgressEvent::LevelUp(LevelUp {
                target: XpTarget::Category(category),
                old_level,
                new_level: outcome.level,
            }));
        }
    }

    // ========================================
    // HABITS & HOBBIES
    // ========================================

    /// Start tracking a new habit or hobby
    pub fn add_activity(&mut self, kind: ActivityKind, name: &str) -> &Activity {
        let activity = Activity::new(name, self.curve.habit_base_xp);
        debug!(%kind, id = %activity.id, activity_name = name, "Activity added");
        let list = self.activities_mut(kind);
        list.push(activity);
        let index = list.len() - 1;

        if kind == ActivityKind::Habit {
            let mut events = Vec::new();
            self.recompute(&mut events);
        }
        &self.activities(kind)[index]
    }

    /// Find an item by exact id, unique id prefix, or case-insensitive name
    pub fn resolve_activity(&self, kind: ActivityKind, key: &str) -> Option<String> {
        let list = self.activities(kind);
        if let Some(a) = list.iter().find(|a| a.id == key) {
            return Some(a.id.clone());
        }

        let by_prefix: Vec<&Activity> = list.iter().filter(|a| a.id.starts_with(key)).collect();
        if let [only] = by_prefix.as_slice() {
            return Some(only.id.clone());
        }

        let by_name: Vec<&Activity> = list
            .iter()
            .filter(|a| a.name.eq_ignore_ascii_case(key))
            .collect();
        match by_name.as_slice() {
            [only] => Some(only.id.clone()),
            _ => None,
        }
    }

    /// Stop tracking an item
    pub fn remove_activity(&mut self, kind: ActivityKind, id: &str) -> Option<Activity> {
        let list = self.activities_mut(kind);
        let index = list.iter().position(|a| a.id == id)?;
        let removed = list.remove(index);
        debug!(%kind, id, "Activity removed");

        if kind == ActivityKind::Habit {
            let mut events = Vec::new();
            self.recompute(&mut events);
        }
        Some(removed)
    }

    /// Toggle completion of an item for one calendar day
    pub fn toggle_activity(
        &mut self,
        kind: ActivityKind,
        id: &str,
        date: NaiveDate,
        now: DateTime<Utc>,
    ) -> Option<Vec<ProgressEvent>> {
        let reward = self.rewards.completion(kind);
        let activity = self
            .activities_mut(kind)
            .iter_mut()
            .find(|a| a.id == id)?;
        let old_level = activity.ledger.level;
        let outcome = activity.toggle_for_date(date, reward, now);
        let target = XpTarget::Activity {
            kind,
            id: activity.id.clone(),
            name: activity.name.clone(),
        };

        let mut events = Vec::new();
        let reason = format!("{}", date.format(super::activity::DATE_FORMAT));
        match outcome.change {
            XpChange::Awarded(award) => {
                events.push(ProgressEvent::XpAwarded {
                    target: target.clone(),
                    amount: reward,
                    reason,
                });
                if award.leveled_up {
                    info!(%kind, id, level = award.level, "Activity leveled up");
                    events.push(ProgressEvent::LevelUp(LevelUp {
                        target: target.clone(),
                        old_level,
                        new_level: award.level,
                    }));
                }
            }
            XpChange::Deducted(deduct) => {
                events.push(ProgressEvent::XpDeducted {
                    target: target.clone(),
                    amount: reward,
                    reason,
                });
                if deduct.leveled_down {
                    info!(%kind, id, level = deduct.level, "Activity leveled down");
                    events.push(ProgressEvent::LevelDown(LevelUp {
                        target: target.clone(),
                        old_level,
                        new_level: deduct.level,
                    }));
                }
            }
        }
        events.push(ProgressEvent::StreakChanged {
            target,
            streak: outcome.streak,
        });

        self.recompute(&mut events);
        Some(events)
    }

    /// Complete an item now; a level-up adds the kind's bonus to lifetime XP
    pub fn complete_activity(
        &mut self,
        kind: ActivityKind,
        id: &str,
        now: DateTime<Utc>,
    ) -> Option<Vec<ProgressEvent>> {
        let reward = self.rewards.completion(kind);
        let bonus = self.rewards.level_bonus(kind);
        let activity = self
            .activities_mut(kind)
            .iter_mut()
            .find(|a| a.id == id)?;
        let old_level = activity.ledger.level;
        let outcome = activity.complete(reward, now);
        let streak = activity.streak;
        let target = XpTarget::Activity {
            kind,
            id: activity.id.clone(),
            name: activity.name.clone(),
        };

        let mut events = vec![ProgressEvent::XpAwarded {
            target: target.clone(),
            amount: reward,
            reason: "completed".to_string(),
        }];
        if outcome.leveled_up {
            info!(%kind, id, level = outcome.level, "Activity leveled up");
            events.push(ProgressEvent::LevelUp(LevelUp {
                target: target.clone(),
                old_level,
                new_level: outcome.level,
            }));
            if bonus > 0 {
                self.player.total_xp = self.player.total_xp.saturating_add(bonus);
                events.push(ProgressEvent::XpAwarded {
                    target: XpTarget::Player,
                    amount: bonus,
                    reason: format!("{kind} level-up bonus"),
                });
            }
        }
        events.push(ProgressEvent::StreakChanged { target, streak });

        self.recompute(&mut events);
        Some(events)
    }

    /// Refresh the derived player level and title
    fn recompute(&mut self, events: &mut Vec<ProgressEvent>) {
        let standing = self.standing();
        let old_level = self.player.level;
        self.player.title = standing.title.to_string();
        if standing.level == old_level {
            return;
        }

        self.player.level = standing.level;
        info!(
            old_level,
            new_level = standing.level,
            title = standing.title,
            "Overall level changed"
        );
        events.push(ProgressEvent::OverallLevelChanged {
            old_level,
            new_level: standing.level,
            title: standing.title,
        });
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new(RewardTable::default(), LevelCurve::default())
    }
}
