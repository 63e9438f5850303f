//! Questlog - XP, levels and titles for everyday progress
//!
//! Questlog turns tracked activity (subjects and test scores, goals, books,
//! screen-time discipline, timetable events, habits and hobbies) into
//! experience points. Every category and every habit or hobby levels up on
//! its own curve, and the player's overall level and title are derived from
//! all of them.
//!
//! ## Layout
//!
//! - [`progress`]: the scoring engine. Pure and synchronous.
//! - [`snapshot`]: the persisted document shape.
//! - [`store`]: snapshot storage (SQLite or JSON files).
//! - [`config`]: `~/.questlog/config.toml`.

pub mod config;
pub mod progress;
pub mod snapshot;
pub mod store;
