//! Tests for habit and hobby tracking

use questlog::progress::{ActivityKind, ProgressEvent, ProgressTracker, XpTarget};

use crate::common::{day, noon};

#[test]
fn test_toggling_a_day_twice_restores_xp_and_streak() {
    let mut tracker = ProgressTracker::default();
    let id = tracker.add_activity(ActivityKind::Habit, "Read").id.clone();
    tracker
        .toggle_activity(ActivityKind::Habit, &id, day(2023, 12, 31), noon(2023, 12, 31))
        .unwrap();
    let before = tracker.habits()[0].clone();

    for _ in 0..2 {
        tracker
            .toggle_activity(ActivityKind::Habit, &id, day(2024, 1, 1), noon(2024, 1, 1))
            .unwrap();
    }

    let after = &tracker.habits()[0];
    assert_eq!(after.ledger, before.ledger);
    assert_eq!(after.streak, before.streak);
    assert!(!after.is_completed_on(day(2024, 1, 1)));
    assert!(after.is_completed_on(day(2023, 12, 31)));
    assert_eq!(after.history.len(), before.history.len() + 2);
}

#[test]
fn test_toggle_today_sets_completed_flag() {
    let mut tracker = ProgressTracker::default();
    let id = tracker.add_activity(ActivityKind::Habit, "Run").id.clone();

    tracker
        .toggle_activity(ActivityKind::Habit, &id, day(2024, 3, 1), noon(2024, 3, 5))
        .unwrap();
    assert!(!tracker.habits()[0].completed);

    tracker
        .toggle_activity(ActivityKind::Habit, &id, day(2024, 3, 5), noon(2024, 3, 5))
        .unwrap();
    assert!(tracker.habits()[0].completed);
}

#[test]
fn test_complete_level_up_grants_lifetime_bonus() {
    let mut tracker = ProgressTracker::default();
    let id = tracker.add_activity(ActivityKind::Habit, "Stretch").id.clone();

    // 20 XP per completion, level 2 at 100
    let mut bonus_events = 0;
    for _ in 0..5 {
        let events = tracker
            .complete_activity(ActivityKind::Habit, &id, noon(2024, 1, 1))
            .unwrap();
        bonus_events += events
            .iter()
            .filter(|e| {
                matches!(
                    e,
                    ProgressEvent::XpAwarded {
                        target: XpTarget::Player,
                        amount: 50,
                        ..
                    }
                )
            })
            .count();
    }

    let habit = &tracker.habits()[0];
    assert_eq!(habit.ledger.level, 2);
    assert_eq!(habit.ledger.xp, 0);
    assert_eq!(habit.streak, 5);
    assert_eq!(bonus_events, 1);
    assert_eq!(tracker.player().total_xp, 50);
}

#[test]
fn test_hobbies_level_separately_and_skip_overall_level() {
    let mut tracker = ProgressTracker::default();
    let id = tracker.add_activity(ActivityKind::Hobby, "Guitar").id.clone();

    for _ in 0..20 {
        tracker
            .complete_activity(ActivityKind::Hobby, &id, noon(2024, 1, 1))
            .unwrap();
    }

    let hobby = &tracker.hobbies()[0];
    assert!(hobby.ledger.level >= 4);
    assert!(tracker.habits().is_empty());
    assert_eq!(tracker.player().level, 1);
    // 75 per hobby level-up
    assert_eq!(
        tracker.player().total_xp,
        75 * u64::from(hobby.ledger.level - 1)
    );
}

#[test]
fn test_resolve_by_name_and_prefix() {
    let mut tracker = ProgressTracker::default();
    let id = tracker.add_activity(ActivityKind::Habit, "Meditate").id.clone();

    assert_eq!(
        tracker.resolve_activity(ActivityKind::Habit, "meditate"),
        Some(id.clone())
    );
    assert_eq!(
        tracker.resolve_activity(ActivityKind::Habit, &id[..8]),
        Some(id.clone())
    );
    assert_eq!(tracker.resolve_activity(ActivityKind::Hobby, "meditate"), None);

    let removed = tracker.remove_activity(ActivityKind::Habit, &id).unwrap();
    assert_eq!(removed.name, "Meditate");
    assert!(tracker.habits().is_empty());
}
