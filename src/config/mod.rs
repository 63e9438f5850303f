//! Configuration loading and management

mod io;
mod settings;

pub use settings::Settings;

use std::path::PathBuf;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::progress::{LevelCurve, RewardTable};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub settings: Settings,

    /// Starting thresholds for new ledgers
    #[serde(default)]
    pub curve: LevelCurve,

    /// XP per action
    #[serde(default)]
    pub rewards: RewardTable,
}

/// Smallest usable first threshold; below this thresholds never grow
pub const MIN_BASE_XP: u64 = 2;

impl Config {
    /// Reject values the engine cannot work with
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("curve.habit_base_xp", self.curve.habit_base_xp),
            ("curve.category_base_xp", self.curve.category_base_xp),
        ] {
            if value < MIN_BASE_XP {
                bail!("{key} must be at least {MIN_BASE_XP}, got {value}");
            }
        }
        Ok(())
    }

    /// Directory holding the snapshot store (`settings.data_dir` or ~/.questlog/)
    pub fn data_dir(&self) -> PathBuf {
        self.settings
            .data_dir
            .clone()
            .unwrap_or_else(Self::global_config_dir)
    }
}
