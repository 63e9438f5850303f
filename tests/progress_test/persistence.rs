//! Tests for snapshot round-trips through the stores

use questlog::progress::{Action, ActivityKind, Category, GoalStats, ProgressTracker};
use questlog::snapshot::Snapshot;
use questlog::store::{DocumentStore, LocalStore, SnapshotStore, StoreError};
use tempfile::TempDir;

use crate::common::{day, noon, restore};

fn busy_tracker() -> ProgressTracker {
    let mut tracker = ProgressTracker::default();
    tracker.record(Action::SubjectAdded);
    tracker.record(Action::TestRecorded {
        score: Some(45.0),
        max_score: Some(50.0),
    });
    tracker.add_xp(Category::Timetable, 1_200, "import");
    tracker.check_goal_achievements(&GoalStats {
        total_goals: 1,
        ..GoalStats::default()
    });

    let id = tracker.add_activity(ActivityKind::Habit, "Read").id.clone();
    tracker.toggle_activity(ActivityKind::Habit, &id, day(2024, 1, 1), noon(2024, 1, 1));
    let id = tracker.add_activity(ActivityKind::Hobby, "Chess").id.clone();
    tracker.complete_activity(ActivityKind::Hobby, &id, noon(2024, 1, 1));
    tracker
}

fn assert_same_state(a: &ProgressTracker, b: &ProgressTracker) {
    assert_eq!(a.player(), b.player());
    for category in Category::ALL {
        assert_eq!(a.categories()[category], b.categories()[category]);
    }
    assert_eq!(a.habits(), b.habits());
    assert_eq!(a.hobbies(), b.hobbies());
    assert_eq!(a.unlocked_achievements(), b.unlocked_achievements());
}

fn round_trip(store: &dyn SnapshotStore) {
    let tracker = busy_tracker();
    store
        .save("alice", &tracker.snapshot(noon(2024, 1, 2)))
        .unwrap();

    let loaded = store.load("alice").unwrap().expect("snapshot saved");
    assert_eq!(loaded.updated_at, Some(noon(2024, 1, 2)));
    assert_same_state(&tracker, &restore(loaded));
}

#[test]
fn test_local_store_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = LocalStore::open(dir.path()).unwrap();
    round_trip(&store);
}

#[test]
fn test_document_store_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = DocumentStore::connect(&dir.path().join("progress.db")).unwrap();
    round_trip(&store);
    store.close().unwrap();
}

#[test]
fn test_restore_does_not_replay_awards() {
    let tracker = busy_tracker();
    let snapshot = tracker.snapshot(noon(2024, 1, 2));
    let lifetime = snapshot.player.total_xp;

    let restored = restore(snapshot);
    assert_eq!(restored.player().total_xp, lifetime);
    // 1200 XP: 500 to reach level 2, 700 of the next 750
    assert_eq!(restored.categories()[Category::Timetable].level(), 2);
    assert_eq!(restored.categories()[Category::Timetable].ledger.xp, 700);
}

#[test]
fn test_unknown_fields_survive_a_round_trip() {
    let json = r#"{
        "displayName": "Avi",
        "player": {"totalXP": 5, "level": 1, "title": "Noob Idiot", "avatar": "cat"},
        "books": {"totalXP": 5, "overallLevel": 1, "nextLevelXP": 500, "books": [{"title": "Dune"}]},
        "hobbies": [{"id": "h1", "name": "Guitar", "type": "music", "level": 2, "xp": 10, "nextLevelXP": 150}]
    }"#;
    let tracker = restore(Snapshot::from_json(json).unwrap());

    let dir = TempDir::new().unwrap();
    let store = LocalStore::open(dir.path()).unwrap();
    store.save("u", &tracker.snapshot(noon(2024, 1, 1))).unwrap();
    let back = store.load("u").unwrap().unwrap();

    assert_eq!(back.extra["displayName"], "Avi");
    assert_eq!(back.player.fields["avatar"], "cat");
    assert_eq!(back.books.fields["books"][0]["title"], "Dune");
    assert_eq!(back.hobbies[0].fields["type"], "music");
    assert_eq!(back.hobbies[0].ledger.level, 2);
    assert!(!back.hobbies[0].fields.contains_key("level"));

    let written = serde_json::to_value(&back).unwrap();
    assert_eq!(written["hobbies"][0]["type"], "music");
}

#[test]
fn test_users_are_isolated() {
    let dir = TempDir::new().unwrap();
    let store = DocumentStore::connect(&dir.path().join("progress.db")).unwrap();

    store.save("alice", &busy_tracker().snapshot(noon(2024, 1, 1))).unwrap();
    store.save("bob", &Snapshot::default()).unwrap();

    assert_eq!(store.load("bob").unwrap().unwrap().player.total_xp, 0);
    assert!(store.load("alice").unwrap().unwrap().player.total_xp > 0);
    assert_eq!(store.user_ids().unwrap(), vec!["alice", "bob"]);
}

#[test]
fn test_closed_document_store() {
    let dir = TempDir::new().unwrap();
    let store = DocumentStore::connect(&dir.path().join("progress.db")).unwrap();
    store.close().unwrap();

    assert!(matches!(
        store.save("alice", &Snapshot::default()),
        Err(StoreError::Closed)
    ));
    assert!(matches!(store.delete("alice"), Err(StoreError::Closed)));
}
