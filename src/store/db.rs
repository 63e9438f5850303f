//! SQLite document store
//!
//! One row per user id holding that user's snapshot as JSON. The client is
//! created with `connect()` and released with `close()`; clones share the
//! same connection.

use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, OptionalExtension};
use tracing::{debug, warn};

use super::{validate_user_id, SnapshotStore, StoreError};
use crate::snapshot::{Snapshot, SNAPSHOT_VERSION};

/// Snapshot documents keyed by user id
#[derive(Clone)]
pub struct DocumentStore {
    conn: Arc<Mutex<Option<Connection>>>,
}

impl DocumentStore {
    /// Open or create the document database at `path`
    pub fn connect(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        debug!(path = %path.display(), "Document store connected");

        Self::from_connection(conn)
    }

    /// In-memory store, gone when closed
    pub fn connect_in_memory() -> Result<Self, StoreError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        let store = Self {
            conn: Arc::new(Mutex::new(Some(conn))),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Release the connection; later calls fail with `StoreError::Closed`
    pub fn close(&self) -> Result<(), StoreError> {
        let conn = self.conn.lock().expect("Document store lock poisoned").take();
        if let Some(conn) = conn {
            conn.close().map_err(|(_, e)| StoreError::Sqlite(e))?;
            debug!("Document store closed");
        }
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.conn.lock().expect("Document store lock poisoned").is_some()
    }

    fn with_conn<T>(
        &self,
        f: impl FnOnce(&Connection) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let guard = self.conn.lock().expect("Document store lock poisoned");
        let conn = guard.as_ref().ok_or(StoreError::Closed)?;
        f(conn)
    }

    fn init_schema(&self) -> Result<(), StoreError> {
        self.with_conn(|conn| {
            conn.execute_batch(SCHEMA_SQL)?;
            Ok(())
        })?;
        self.run_migrations()
    }

    fn run_migrations(&self) -> Result<(), StoreError> {
        self.with_conn(|conn| {
            let version: i32 = conn
                .query_row("SELECT COALESCE(MAX(version), 0) FROM schema_version", [], |r| r.get(0))
                .unwrap_or(0);

            // Migration 2: remember when a user's document was first written
            if version < 2 {
                let has_created_at: bool = conn
                    .prepare("SELECT COUNT(*) FROM pragma_table_info('documents') WHERE name = 'created_at'")
                    .and_then(|mut s| s.query_row([], |r| r.get::<_, i32>(0)))
                    .map(|c| c > 0)
                    .unwrap_or(false);

                if !has_created_at {
                    conn.execute_batch("ALTER TABLE documents ADD COLUMN created_at INTEGER;")?;
                }
                conn.execute("INSERT OR REPLACE INTO schema_version VALUES (2)", [])?;
            }

            Ok(())
        })
    }
}

impl SnapshotStore for DocumentStore {
    fn load(&self, user_id: &str) -> Result<Option<Snapshot>, StoreError> {
        validate_user_id(user_id)?;
        let body: Option<String> = self.with_conn(|conn| {
            let body = conn
                .query_row(
                    "SELECT body FROM documents WHERE user_id = ?1",
                    [user_id],
                    |r| r.get(0),
                )
                .optional()?;
            Ok(body)
        })?;

        let Some(body) = body else {
            return Ok(None);
        };
        let snapshot = Snapshot::from_json(&body)?;
        if snapshot.version > SNAPSHOT_VERSION {
            warn!(
                user_id,
                version = snapshot.version,
                "Snapshot written by a newer version; unknown fields are kept as-is"
            );
        }
        Ok(Some(snapshot))
    }

    fn save(&self, user_id: &str, snapshot: &Snapshot) -> Result<(), StoreError> {
        validate_user_id(user_id)?;
        let body = serde_json::to_string(snapshot)?;
        let now = chrono::Utc::now().timestamp_millis();

        self.with_conn(|conn| {
            conn.execute(
                r#"
                INSERT INTO documents (user_id, body, version, updated_at, created_at)
                VALUES (?1, ?2, ?3, ?4, ?4)
                ON CONFLICT(user_id) DO UPDATE SET
                    body = ?2, version = ?3, updated_at = ?4
                "#,
                (user_id, &body, snapshot.version, now),
            )?;
            Ok(())
        })?;
        debug!(user_id, bytes = body.len(), "Snapshot saved");
        Ok(())
    }

    fn delete(&self, user_id: &str) -> Result<bool, StoreError> {
        validate_user_id(user_id)?;
        self.with_conn(|conn| {
            let changed = conn.execute("DELETE FROM documents WHERE user_id = ?1", [user_id])?;
            Ok(changed > 0)
        })
    }

    fn user_ids(&self) -> Result<Vec<String>, StoreError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT user_id FROM documents ORDER BY user_id")?;
            let ids = stmt
                .query_map([], |row| row.get(0))?
                .collect::<Result<Vec<String>, _>>()?;
            Ok(ids)
        })
    }

    fn close(&self) -> Result<(), StoreError> {
        DocumentStore::close(self)
    }
}

/// SQL schema for the document database
const SCHEMA_SQL: &str = r#"
-- One snapshot document per user
CREATE TABLE IF NOT EXISTS documents (
    user_id TEXT PRIMARY KEY,
    body TEXT NOT NULL,
    version INTEGER NOT NULL,
    updated_at INTEGER NOT NULL
);

-- Schema version
CREATE TABLE IF NOT EXISTS schema_version (version INTEGER PRIMARY KEY);
INSERT OR IGNORE INTO schema_version VALUES (1);
"#;
