//! Settings configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::store::Backend;

/// General settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Whose snapshot the CLI reads and writes
    #[serde(default = "default_user_id")]
    pub user_id: String,

    /// Snapshot store: "sqlite" (default) or "local" JSON files
    #[serde(default)]
    pub backend: Backend,

    /// Where snapshots live (defaults to ~/.questlog)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

fn default_user_id() -> String {
    "local".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            backend: Backend::default(),
            data_dir: None,
        }
    }
}
