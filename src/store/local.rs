//! JSON file store: `<dir>/<user_id>.json`

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::{debug, warn};

use super::{validate_user_id, SnapshotStore, StoreError};
use crate::snapshot::{Snapshot, SNAPSHOT_VERSION};

/// A directory of per-user snapshot files
#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Use `dir`, creating it if needed
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Path of the snapshot file for `user_id`
    pub fn path_for(&self, user_id: &str) -> Result<PathBuf, StoreError> {
        validate_user_id(user_id)?;
        Ok(self.dir.join(format!("{user_id}.json")))
    }

    fn lock(&self, path: &Path) -> Result<std::fs::File, StoreError> {
        // Separate lock file so the rename below never replaces a locked inode
        let lock_path = path.with_extension("json.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)?;
        lock_file
            .lock_exclusive()
            .map_err(|source| StoreError::Lock {
                path: lock_path,
                source,
            })?;
        Ok(lock_file)
    }
}

impl SnapshotStore for LocalStore {
    fn load(&self, user_id: &str) -> Result<Option<Snapshot>, StoreError> {
        let path = self.path_for(user_id)?;
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let snapshot = Snapshot::from_json(&content)?;
        if snapshot.version > SNAPSHOT_VERSION {
            warn!(
                path = %path.display(),
                version = snapshot.version,
                "Snapshot written by a newer version; unknown fields are kept as-is"
            );
        }
        Ok(Some(snapshot))
    }

    fn save(&self, user_id: &str, snapshot: &Snapshot) -> Result<(), StoreError> {
        let path = self.path_for(user_id)?;
        let content = snapshot.to_json_pretty()?;

        let _lock = self.lock(&path)?;

        let temp_path = path.with_extension("json.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.sync_all()?;

        std::fs::rename(&temp_path, &path)?;
        debug!(path = %path.display(), "Snapshot saved");
        Ok(())
    }

    fn delete(&self, user_id: &str) -> Result<bool, StoreError> {
        let path = self.path_for(user_id)?;
        let _lock = self.lock(&path)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn user_ids(&self) -> Result<Vec<String>, StoreError> {
        let mut ids = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let name = entry?.file_name();
            let Some(id) = name.to_str().and_then(|n| n.strip_suffix(".json")) else {
                continue;
            };
            if validate_user_id(id).is_ok() {
                ids.push(id.to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }
}
