//! Persisted snapshot of one user's progress
//!
//! The JSON shape matches the dashboard document: a `player` record, one
//! record per category (`socialMedia` uses `disciplineLevel` instead of
//! `overallLevel`), and the habit and hobby lists. Missing fields fall back
//! to level 1 / zero XP defaults. Unknown fields are carried through.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::progress::{
    Activity, CategoryProgress, PlayerRecord, XpLedger, CATEGORY_BASE_XP,
};

/// Current snapshot layout version
pub const SNAPSHOT_VERSION: u32 = 1;

fn current_version() -> u32 {
    SNAPSHOT_VERSION
}

fn first_level() -> u32 {
    1
}

fn category_base_xp() -> u64 {
    CATEGORY_BASE_XP
}

/// A category as stored (`overallLevel` variant)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    #[serde(rename = "totalXP", default)]
    pub total_xp: u64,
    #[serde(default = "first_level")]
    pub overall_level: u32,
    #[serde(rename = "nextLevelXP", default = "category_base_xp")]
    pub next_level_xp: u64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Default for CategoryRecord {
    fn default() -> Self {
        Self {
            total_xp: 0,
            overall_level: 1,
            next_level_xp: CATEGORY_BASE_XP,
            fields: Map::new(),
        }
    }
}

impl From<&CategoryProgress> for CategoryRecord {
    fn from(progress: &CategoryProgress) -> Self {
        Self {
            total_xp: progress.ledger.xp,
            overall_level: progress.ledger.level,
            next_level_xp: progress.ledger.next_level_xp,
            fields: progress.fields.clone(),
        }
    }
}

impl From<CategoryRecord> for CategoryProgress {
    fn from(record: CategoryRecord) -> Self {
        Self {
            ledger: XpLedger {
                xp: record.total_xp,
                level: record.overall_level.max(1),
                next_level_xp: record.next_level_xp,
            },
            fields: record.fields,
        }
    }
}

/// The social media category as stored (`disciplineLevel` variant)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisciplineRecord {
    #[serde(rename = "totalXP", default)]
    pub total_xp: u64,
    #[serde(default = "first_level")]
    pub discipline_level: u32,
    #[serde(rename = "nextLevelXP", default = "category_base_xp")]
    pub next_level_xp: u64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Default for DisciplineRecord {
    fn default() -> Self {
        Self {
            total_xp: 0,
            discipline_level: 1,
            next_level_xp: CATEGORY_BASE_XP,
            fields: Map::new(),
        }
    }
}

impl From<&CategoryProgress> for DisciplineRecord {
    fn from(progress: &CategoryProgress) -> Self {
        Self {
            total_xp: progress.ledger.xp,
            discipline_level: progress.ledger.level,
            next_level_xp: progress.ledger.next_level_xp,
            fields: progress.fields.clone(),
        }
    }
}

impl From<DisciplineRecord> for CategoryProgress {
    fn from(record: DisciplineRecord) -> Self {
        Self {
            ledger: XpLedger {
                xp: record.total_xp,
                level: record.discipline_level.max(1),
                next_level_xp: record.next_level_xp,
            },
            fields: record.fields,
        }
    }
}

/// Everything persisted for one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default = "current_version")]
    pub version: u32,
    #[serde(default)]
    pub player: PlayerRecord,
    #[serde(default)]
    pub academics: CategoryRecord,
    #[serde(default)]
    pub goals: CategoryRecord,
    #[serde(default)]
    pub books: CategoryRecord,
    #[serde(default)]
    pub social_media: DisciplineRecord,
    #[serde(default)]
    pub timetable: CategoryRecord,
    #[serde(default)]
    pub habits: Vec<Activity>,
    #[serde(default)]
    pub hobbies: Vec<Activity>,
    /// Unlocked goal achievement IDs
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Document fields this crate does not interpret (email, displayName, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            player: PlayerRecord::default(),
            academics: CategoryRecord::default(),
            goals: CategoryRecord::default(),
            books: CategoryRecord::default(),
            social_media: DisciplineRecord::default(),
            timetable: CategoryRecord::default(),
            habits: Vec::new(),
            hobbies: Vec::new(),
            achievements: Vec::new(),
            updated_at: None,
            extra: Map::new(),
        }
    }
}

impl Snapshot {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gets_defaults() {
        let snapshot = Snapshot::from_json("{}").unwrap();
        assert_eq!(snapshot, Snapshot::default());
        assert_eq!(snapshot.goals.overall_level, 1);
        assert_eq!(snapshot.social_media.next_level_xp, 500);
    }

    #[test]
    fn test_dashboard_document_shape() {
        let json = r#"{
            "player": {"totalXP": 340, "level": 2, "title": "Beginner Adventurer", "name": "AVIRIZZZ"},
            "academics": {"subjects": [{"name": "Maths"}], "overallLevel": 3, "totalXP": 120, "nextLevelXP": 1125},
            "socialMedia": {"dailyUsage": 30, "limit": 120, "disciplineLevel": 2, "streakDays": 4, "totalXP": 10, "nextLevelXP": 750},
            "timetable": {"totalXP": 5},
            "habits": [{"id": "a", "name": "Read", "level": 2, "xp": 10, "nextLevelXP": 150, "streak": 3, "completed": false, "history": []}],
            "email": "someone@example.com"
        }"#;
        let snapshot = Snapshot::from_json(json).unwrap();

        assert_eq!(snapshot.player.total_xp, 340);
        assert_eq!(snapshot.academics.overall_level, 3);
        assert!(snapshot.academics.fields.contains_key("subjects"));
        assert_eq!(snapshot.social_media.discipline_level, 2);
        assert_eq!(snapshot.social_media.fields["streakDays"], 4);
        assert_eq!(snapshot.timetable.overall_level, 1);
        assert_eq!(snapshot.habits[0].ledger.level, 2);
        assert_eq!(snapshot.extra["email"], "someone@example.com");

        let value: Value = serde_json::from_str(&snapshot.to_json_pretty().unwrap()).unwrap();
        assert_eq!(value["socialMedia"]["disciplineLevel"], 2);
        assert!(value["socialMedia"].get("overallLevel").is_none());
        assert_eq!(value["academics"]["overallLevel"], 3);
        assert_eq!(value["academics"]["subjects"][0]["name"], "Maths");
        assert_eq!(value["player"]["totalXP"], 340);
    }

    #[test]
    fn test_level_zero_is_read_as_one() {
        let record: CategoryRecord = serde_json::from_str(r#"{"overallLevel": 0}"#).unwrap();
        let progress = CategoryProgress::from(record);
        assert_eq!(progress.ledger.level, 1);
    }
}
