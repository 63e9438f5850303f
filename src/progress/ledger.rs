//! XP ledger
//!
//! A ledger holds the XP accumulated toward the next level, the current
//! level, and the threshold that ends the level. Every category record,
//! habit and hobby embeds one.

use serde::{Deserialize, Serialize};

use super::levels::{grow_threshold, shrink_threshold};

/// Default threshold for a fresh per-item ledger (habits, hobbies)
pub const ITEM_BASE_XP: u64 = 100;

/// Default threshold for a fresh category ledger
pub const CATEGORY_BASE_XP: u64 = 500;

/// XP within the current level plus level bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct XpLedger {
    pub xp: u64,
    pub level: u32,
    #[serde(rename = "nextLevelXP")]
    pub next_level_xp: u64,
}

impl Default for XpLedger {
    fn default() -> Self {
        Self::new(ITEM_BASE_XP)
    }
}

/// Result of an award
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AwardOutcome {
    pub leveled_up: bool,
    /// Number of thresholds crossed by this award
    pub levels_gained: u32,
    pub level: u32,
}

/// Result of a deduction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeductOutcome {
    pub leveled_down: bool,
    pub levels_lost: u32,
    pub level: u32,
}

impl XpLedger {
    /// Fresh ledger at level 1 with the given first threshold
    pub fn new(base_xp: u64) -> Self {
        Self {
            xp: 0,
            level: 1,
            next_level_xp: base_xp.max(1),
        }
    }

    /// Add XP, rolling over as many levels as the amount covers.
    ///
    /// Afterwards `xp < next_level_xp` always holds.
    pub fn award(&mut self, amount: u64) -> AwardOutcome {
        let start_level = self.level;
        let mut xp = self.xp.saturating_add(amount);
        let mut threshold = self.next_level_xp.max(1);

        while xp >= threshold {
            if threshold == 1 {
                // A threshold of 1 never grows: one level per remaining point
                let levels = u32::try_from(xp).unwrap_or(u32::MAX);
                self.level = self.level.saturating_add(levels);
                xp = 0;
                break;
            }
            xp -= threshold;
            self.level = self.level.saturating_add(1);
            threshold = grow_threshold(threshold);
        }

        self.xp = xp;
        self.next_level_xp = threshold;

        let levels_gained = self.level - start_level;
        AwardOutcome {
            leveled_up: levels_gained > 0,
            levels_gained,
            level: self.level,
        }
    }

    /// Remove XP, borrowing from lower levels when the current level runs dry.
    ///
    /// XP never goes negative and level never drops below 1; whatever cannot
    /// be borrowed at level 1 is discarded.
    pub fn deduct(&mut self, amount: u64) -> DeductOutcome {
        let start_level = self.level.max(1);
        let mut xp = i128::from(self.xp) - i128::from(amount);
        let mut level = start_level;
        let mut threshold = self.next_level_xp.max(1);

        while xp < 0 && level > 1 {
            let previous = shrink_threshold(threshold).max(1);
            if previous == 1 {
                // Every lower level is worth 1 XP
                let levels = u32::try_from(-xp).unwrap_or(u32::MAX).min(level - 1);
                level -= levels;
                threshold = 1;
                xp += i128::from(levels);
                break;
            }
            level -= 1;
            threshold = previous;
            xp += i128::from(previous);
        }

        self.xp = u64::try_from(xp.max(0)).unwrap_or(u64::MAX);
        self.level = level;
        self.next_level_xp = threshold;

        let levels_lost = start_level - level;
        DeductOutcome {
            leveled_down: levels_lost > 0,
            levels_lost,
            level,
        }
    }

    /// Progress toward the next level (0.0 - 1.0)
    pub fn progress_to_next(&self) -> f32 {
        if self.next_level_xp == 0 {
            return 1.0;
        }
        (self.xp as f32 / self.next_level_xp as f32).min(1.0)
    }

    /// Back to level 1 with the given first threshold
    pub fn reset(&mut self, base_xp: u64) {
        *self = Self::new(base_xp);
    }
}
