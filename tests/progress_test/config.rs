//! Tests for config-driven setup

use questlog::config::Config;
use questlog::progress::{Action, ActivityKind, Category, LevelCurve, ProgressTracker, RewardTable};
use questlog::store::{open_store, Backend};
use tempfile::TempDir;

use crate::common::noon;

fn write_config(dir: &TempDir, body: &str) -> Config {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, body).unwrap();
    Config::from_file(&path).unwrap()
}

#[test]
fn test_custom_curve_and_rewards_apply() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        &dir,
        r#"
        [curve]
        habit_base_xp = 40
        category_base_xp = 100

        [rewards]
        book_added = 60
        habit_completed = 40
        "#,
    );

    let mut tracker = ProgressTracker::new(config.rewards.clone(), config.curve);
    tracker.record(Action::BookAdded);
    tracker.record(Action::BookAdded);
    // 120 XP against a 100 threshold
    assert_eq!(tracker.categories()[Category::Books].level(), 2);
    assert_eq!(tracker.categories()[Category::Books].ledger.next_level_xp, 150);

    let id = tracker.add_activity(ActivityKind::Habit, "Walk").id.clone();
    tracker.complete_activity(ActivityKind::Habit, &id, noon(2024, 1, 1));
    assert_eq!(tracker.habits()[0].ledger.level, 2);
}

#[test]
fn test_curve_base_of_one_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[curve]\nhabit_base_xp = 1\n").unwrap();

    let err = Config::load_from(Some(&path)).unwrap_err();
    assert!(format!("{err:#}").contains("curve.habit_base_xp"));
}

#[test]
fn test_unit_threshold_tracker_awards_in_one_step() {
    // Built in code, bypassing config validation
    let curve = LevelCurve {
        habit_base_xp: 1,
        category_base_xp: 1,
    };
    let mut tracker = ProgressTracker::new(RewardTable::default(), curve);
    tracker.add_xp(Category::Books, 2_000_000_000, "import");

    let books = &tracker.categories()[Category::Books];
    assert_eq!(books.level(), 2_000_000_001);
    assert_eq!(books.ledger.xp, 0);
    assert_eq!(books.ledger.next_level_xp, 1);
}

#[test]
fn test_configured_backend_and_data_dir() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    let config = write_config(
        &dir,
        &format!(
            "[settings]\nuser_id = \"carol\"\nbackend = \"local\"\ndata_dir = {:?}\n",
            data_dir.display().to_string()
        ),
    );
    assert_eq!(config.settings.backend, Backend::Local);
    assert_eq!(config.data_dir(), data_dir);

    let store = open_store(config.settings.backend, &config.data_dir()).unwrap();
    let tracker = ProgressTracker::new(config.rewards.clone(), config.curve);
    store
        .save(&config.settings.user_id, &tracker.snapshot(noon(2024, 1, 1)))
        .unwrap();

    assert!(data_dir.join("users").join("carol.json").exists());
}
