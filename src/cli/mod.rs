//! CLI command implementations

pub mod achievements;
pub mod activity;
pub mod award;
pub mod export;
pub mod init;
pub mod record;
pub mod reset;
pub mod session;
pub mod status;
pub mod users;

pub use session::{Context, Session};
