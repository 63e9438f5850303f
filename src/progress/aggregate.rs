//! Overall level
//!
//! The player level is the floored weighted mean of the five category
//! levels and the average habit level, never below 1.

use super::activity::Activity;
use super::category::CategoryBook;
use super::levels::title_for_level;

/// Weight of each category in the overall level
pub const CATEGORY_WEIGHT: f64 = 1.0;

/// Weight of the habits average in the overall level
pub const HABITS_WEIGHT: f64 = 1.0;

/// A level with its share of the mean
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedLevel {
    pub level: f64,
    pub weight: f64,
}

/// Overall level and its title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverallStanding {
    pub level: u32,
    pub title: &'static str,
}

/// max(1, floor(Σ level·weight / Σ weight))
pub fn weighted_floor_level(components: &[WeightedLevel]) -> u32 {
    let total_weight: f64 = components.iter().map(|c| c.weight).sum();
    if total_weight <= 0.0 {
        return 1;
    }
    let weighted_sum: f64 = components.iter().map(|c| c.level * c.weight).sum();
    let mean = (weighted_sum / total_weight).floor();

    if mean < 1.0 {
        1
    } else if mean >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        mean as u32
    }
}

/// Mean habit level, 1 when there are no habits
pub fn habits_average_level(habits: &[Activity]) -> f64 {
    if habits.is_empty() {
        return 1.0;
    }
    let sum: f64 = habits.iter().map(|h| f64::from(h.ledger.level)).sum();
    sum / habits.len() as f64
}

/// Recompute the player's overall level and title
pub fn recompute_overall_level(categories: &CategoryBook, habits: &[Activity]) -> OverallStanding {
    let mut components: Vec<WeightedLevel> = categories
        .iter()
        .map(|(_, progress)| WeightedLevel {
            level: f64::from(progress.level()),
            weight: CATEGORY_WEIGHT,
        })
        .collect();
    components.push(WeightedLevel {
        level: habits_average_level(habits),
        weight: HABITS_WEIGHT,
    });

    let level = weighted_floor_level(&components);
    OverallStanding {
        level,
        title: title_for_level(level),
    }
}
