//! Snapshot persistence
//!
//! A store holds one [`Snapshot`] per user id. Two backends exist: a SQLite
//! document database ([`DocumentStore`]) and a directory of JSON files
//! ([`LocalStore`]). Both are created explicitly and passed to callers.

mod db;
mod error;
mod local;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use db::DocumentStore;
pub use error::StoreError;
pub use local::LocalStore;

use crate::snapshot::Snapshot;

/// Load/save/delete of per-user snapshots
pub trait SnapshotStore {
    /// `Ok(None)` when nothing has been saved for `user_id` yet
    fn load(&self, user_id: &str) -> Result<Option<Snapshot>, StoreError>;

    fn save(&self, user_id: &str, snapshot: &Snapshot) -> Result<(), StoreError>;

    /// Returns whether a snapshot existed
    fn delete(&self, user_id: &str) -> Result<bool, StoreError>;

    /// Every user id with a saved snapshot, sorted
    fn user_ids(&self) -> Result<Vec<String>, StoreError>;

    /// Release held resources; a no-op for stores that hold none
    fn close(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Which store implementation to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// One JSON file per user
    Local,
    /// SQLite document database
    #[default]
    Sqlite,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Sqlite => "sqlite",
        }
    }
}

/// File name of the SQLite database inside the data directory
pub const DATABASE_FILE: &str = "progress.db";

/// Open the configured backend rooted at `data_dir`
pub fn open_store(backend: Backend, data_dir: &Path) -> Result<Box<dyn SnapshotStore>, StoreError> {
    match backend {
        Backend::Local => Ok(Box::new(LocalStore::open(data_dir.join("users"))?)),
        Backend::Sqlite => Ok(Box::new(DocumentStore::connect(&data_dir.join(DATABASE_FILE))?)),
    }
}

/// User ids become file names and keys, so keep them plain
pub(crate) fn validate_user_id(user_id: &str) -> Result<(), StoreError> {
    let valid = !user_id.is_empty()
        && !user_id.starts_with('.')
        && user_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidUserId(user_id.to_string()))
    }
}
