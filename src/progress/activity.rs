//! Per-item trackers for habits and hobbies
//!
//! Each item owns an XP ledger, a streak, and a record of which calendar
//! days it was completed on.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ledger::{AwardOutcome, DeductOutcome, XpLedger};

/// Date format used for completion keys
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// What kind of item is being tracked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Habit,
    Hobby,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Habit => "habit",
            Self::Hobby => "hobby",
        }
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single completion transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionEvent {
    pub date: DateTime<Utc>,
    pub completed: bool,
}

/// A tracked habit or hobby
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub ledger: XpLedger,
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub history: Vec<CompletionEvent>,
    /// Day (YYYY-MM-DD) → completed on that day
    #[serde(default)]
    pub completion_dates: BTreeMap<String, bool>,
    /// Item fields this crate does not interpret (type, category, ...)
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// XP movement caused by a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XpChange {
    Awarded(AwardOutcome),
    Deducted(DeductOutcome),
}

/// Result of toggling a day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// State of the toggled day after the toggle
    pub completed: bool,
    pub change: XpChange,
    pub streak: u32,
}

impl Activity {
    pub fn new(name: impl Into<String>, base_xp: u64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            ledger: XpLedger::new(base_xp),
            streak: 0,
            completed: false,
            history: Vec::new(),
            completion_dates: BTreeMap::new(),
            fields: Map::new(),
        }
    }

    /// First eight characters of the id, for listings
    pub fn short_id(&self) -> String {
        self.id.chars().take(8).collect()
    }

    /// Whether the item was completed on `date`
    pub fn is_completed_on(&self, date: NaiveDate) -> bool {
        self.completion_dates
            .get(&date.format(DATE_FORMAT).to_string())
            .copied()
            .unwrap_or(false)
    }

    /// Flip the completion state for one calendar day.
    ///
    /// Completing awards `reward` and extends the streak; un-completing
    /// deducts the same `reward` and shortens the streak (never below 0),
    /// so toggling a day twice leaves XP and streak where they started.
    pub fn toggle_for_date(
        &mut self,
        date: NaiveDate,
        reward: u64,
        now: DateTime<Utc>,
    ) -> ToggleOutcome {
        let key = date.format(DATE_FORMAT).to_string();
        let was_completed = self.completion_dates.get(&key).copied().unwrap_or(false);
        let completed = !was_completed;
        self.completion_dates.insert(key, completed);

        let change = if completed {
            self.streak = self.streak.saturating_add(1);
            XpChange::Awarded(self.ledger.award(reward))
        } else {
            self.streak = self.streak.saturating_sub(1);
            XpChange::Deducted(self.ledger.deduct(reward))
        };

        if date == now.date_naive() {
            self.completed = completed;
        }
        self.history.push(CompletionEvent {
            date: now,
            completed,
        });

        ToggleOutcome {
            completed,
            change,
            streak: self.streak,
        }
    }

    /// Mark the item done right now, regardless of the per-day record
    pub fn complete(&mut self, reward: u64, now: DateTime<Utc>) -> AwardOutcome {
        self.streak = self.streak.saturating_add(1);
        self.completed = true;
        self.history.push(CompletionEvent {
            date: now,
            completed: true,
        });
        self.ledger.award(reward)
    }
}
