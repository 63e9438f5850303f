//! Category progress tracking
//!
//! Five feature areas carry their own XP ledger. Habits are the sixth
//! component of the overall level but are tracked per item (see `activity`).

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ledger::{AwardOutcome, XpLedger};
use super::levels::{title_for_level, LevelCurve};

/// Feature area with its own ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Academics,
    Goals,
    Books,
    SocialMedia,
    Timetable,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::Academics,
        Self::Goals,
        Self::Books,
        Self::SocialMedia,
        Self::Timetable,
    ];

    /// Key used in the persisted snapshot
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Academics => "academics",
            Self::Goals => "goals",
            Self::Books => "books",
            Self::SocialMedia => "socialMedia",
            Self::Timetable => "timetable",
        }
    }

    /// Parse a snapshot key or CLI name
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "academics" => Some(Self::Academics),
            "goals" => Some(Self::Goals),
            "books" => Some(Self::Books),
            "socialmedia" | "social-media" | "social" => Some(Self::SocialMedia),
            "timetable" => Some(Self::Timetable),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Academics => "Academics",
            Self::Goals => "Goals",
            Self::Books => "Books",
            Self::SocialMedia => "Social Media Discipline",
            Self::Timetable => "Timetable",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One category's ledger plus the feature fields this crate carries opaquely
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryProgress {
    pub ledger: XpLedger,
    /// Feature data (subjects, goal lists, ...) passed through untouched
    pub fields: Map<String, Value>,
}

impl CategoryProgress {
    pub fn new(base_xp: u64) -> Self {
        Self {
            ledger: XpLedger::new(base_xp),
            fields: Map::new(),
        }
    }

    pub fn level(&self) -> u32 {
        self.ledger.level
    }
}

/// The player's lifetime totals and derived standing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerRecord {
    #[serde(rename = "totalXP")]
    pub total_xp: u64,
    pub level: u32,
    pub title: String,
    /// Profile fields (name, ...) passed through untouched
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Default for PlayerRecord {
    fn default() -> Self {
        Self {
            total_xp: 0,
            level: 1,
            title: title_for_level(1).to_string(),
            fields: Map::new(),
        }
    }
}

/// Category → progress record
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBook {
    records: [CategoryProgress; 5],
}

impl CategoryBook {
    pub fn new(curve: &LevelCurve) -> Self {
        Self {
            records: std::array::from_fn(|_| CategoryProgress::new(curve.category_base_xp)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &CategoryProgress)> {
        Category::ALL.into_iter().zip(self.records.iter())
    }

    /// Levels of all categories in fixed order
    pub fn levels(&self) -> [u32; 5] {
        std::array::from_fn(|i| self.records[i].level())
    }
}

impl Default for CategoryBook {
    fn default() -> Self {
        Self::new(&LevelCurve::default())
    }
}

impl Index<Category> for CategoryBook {
    type Output = CategoryProgress;

    fn index(&self, category: Category) -> &CategoryProgress {
        &self.records[category.slot()]
    }
}

impl IndexMut<Category> for CategoryBook {
    fn index_mut(&mut self, category: Category) -> &mut CategoryProgress {
        &mut self.records[category.slot()]
    }
}

/// Award XP to a category and count it toward the player's lifetime total.
///
/// The lifetime total grows whether or not the category levels up.
pub fn add_category_xp(
    progress: &mut CategoryProgress,
    player: &mut PlayerRecord,
    amount: u64,
) -> AwardOutcome {
    player.total_xp = player.total_xp.saturating_add(amount);
    progress.ledger.award(amount)
}
