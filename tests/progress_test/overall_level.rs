//! Tests for the overall level and titles

use questlog::progress::{
    title_for_level, weighted_floor_level, Action, Category, GoalPriority, ProgressEvent, ProgressTracker,
    WeightedLevel,
};

use crate::common::{category_levels, restore, snapshot_at_levels};

fn components(levels: &[u32]) -> Vec<WeightedLevel> {
    levels
        .iter()
        .map(|l| WeightedLevel {
            level: f64::from(*l),
            weight: 1.0,
        })
        .collect()
}

#[test]
fn test_order_does_not_matter() {
    let levels = [1, 4, 2, 9, 3, 7];
    let expected = weighted_floor_level(&components(&levels));

    let mut rotated = levels;
    for _ in 0..levels.len() {
        rotated.rotate_left(1);
        assert_eq!(weighted_floor_level(&components(&rotated)), expected);
    }

    let mut reversed = levels;
    reversed.reverse();
    assert_eq!(weighted_floor_level(&components(&reversed)), expected);
    assert_eq!(expected, 4);
}

#[test]
fn test_fresh_player_is_level_one_noob() {
    let tracker = ProgressTracker::default();
    let standing = tracker.standing();

    assert_eq!(standing.level, 1);
    assert_eq!(standing.title, "Noob Idiot");
    assert_eq!(weighted_floor_level(&[]), 1);
}

#[test]
fn test_all_level_ten_is_goated() {
    let tracker = restore(snapshot_at_levels(10, &[10]));

    assert_eq!(category_levels(&tracker), vec![10; 5]);
    assert_eq!(tracker.player().level, 10);
    assert_eq!(tracker.player().title, "GOATED");
}

#[test]
fn test_no_habits_count_as_level_one() {
    // (6 * 5 + 1) / 6 = 5.16 -> 5
    let tracker = restore(snapshot_at_levels(6, &[]));
    assert_eq!(tracker.player().level, 5);
    assert_eq!(tracker.player().title, title_for_level(5));
}

#[test]
fn test_habits_are_averaged_before_weighting() {
    // categories 3 each, habits average (1 + 5) / 2 = 3 -> 3
    let tracker = restore(snapshot_at_levels(3, &[1, 5]));
    assert_eq!(tracker.player().level, 3);
    assert_eq!(tracker.player().title, "Novice Explorer");
}

#[test]
fn test_stored_level_zero_items_restore_as_level_one() {
    // (7 * 5 + 1) / 6 = 6; a habit kept at 0 would give 35 / 6 = 5.83 -> 5
    let mut snapshot = snapshot_at_levels(7, &[0]);
    let mut hobby = questlog::progress::Activity::new("guitar", 100);
    hobby.ledger.level = 0;
    snapshot.hobbies.push(hobby);

    let tracker = restore(snapshot);
    assert_eq!(tracker.habits()[0].ledger.level, 1);
    assert_eq!(tracker.hobbies()[0].ledger.level, 1);
    assert_eq!(tracker.player().level, 6);
}

#[test]
fn test_one_category_level_up_keeps_overall_level() {
    let mut tracker = ProgressTracker::default();
    let mut changes = 0;

    // 17 high priority goals = 510 XP: goals reach level 2, the mean stays at 1
    for _ in 0..17 {
        let events = tracker.record(Action::GoalCompleted {
            priority: GoalPriority::High,
        });
        changes += events
            .iter()
            .filter(|e| matches!(e, ProgressEvent::OverallLevelChanged { .. }))
            .count();
    }
    assert_eq!(tracker.categories()[Category::Goals].level(), 2);
    assert_eq!(changes, 0);
    assert_eq!(tracker.player().total_xp, 510);
}

#[test]
fn test_overall_level_change_is_reported() {
    // Level 2 everywhere except goals; one goals level-up lifts the mean to 2
    let mut snapshot = snapshot_at_levels(2, &[2]);
    snapshot.goals.overall_level = 1;
    snapshot.goals.total_xp = 495;
    let mut tracker = restore(snapshot);
    assert_eq!(tracker.player().level, 1);

    let events = tracker.add_xp(Category::Goals, 10, "test");
    let changes: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            ProgressEvent::OverallLevelChanged {
                old_level,
                new_level,
                title,
            } => Some((*old_level, *new_level, *title)),
            _ => None,
        })
        .collect();

    assert_eq!(changes, vec![(1, 2, "Beginner Adventurer")]);
    assert_eq!(tracker.player().level, 2);
}
