//! Shared test utilities for progress integration tests

#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use questlog::progress::{Category, ProgressTracker, XpLedger};
use questlog::snapshot::Snapshot;

/// Noon UTC on the given day
pub fn noon(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0)
        .single()
        .expect("valid date")
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Ledgers at a spread of levels, fill states and thresholds
pub fn sample_ledgers() -> Vec<XpLedger> {
    let mut ledgers = Vec::new();
    for base in [1, 2, 3, 100, 500, 1_000] {
        for level in [1, 2, 5, 12] {
            let threshold = questlog::progress::threshold_for_level(level, base);
            for xp in [0, threshold / 3, threshold.saturating_sub(1)] {
                ledgers.push(XpLedger {
                    xp,
                    level,
                    next_level_xp: threshold,
                });
            }
        }
    }
    ledgers
}

/// Snapshot with every category at `level` and one habit per entry of `habit_levels`
pub fn snapshot_at_levels(level: u32, habit_levels: &[u32]) -> Snapshot {
    let mut snapshot = Snapshot::default();
    snapshot.academics.overall_level = level;
    snapshot.goals.overall_level = level;
    snapshot.books.overall_level = level;
    snapshot.social_media.discipline_level = level;
    snapshot.timetable.overall_level = level;

    for (i, habit_level) in habit_levels.iter().enumerate() {
        let mut habit = questlog::progress::Activity::new(format!("habit {i}"), 100);
        habit.ledger.level = *habit_level;
        snapshot.habits.push(habit);
    }
    snapshot
}

/// Tracker with default rewards and curve restored from `snapshot`
pub fn restore(snapshot: Snapshot) -> ProgressTracker {
    ProgressTracker::from_snapshot(snapshot, Default::default(), Default::default())
}

/// Levels of all five categories in declaration order
pub fn category_levels(tracker: &ProgressTracker) -> Vec<u32> {
    Category::ALL
        .iter()
        .map(|c| tracker.categories()[*c].level())
        .collect()
}
