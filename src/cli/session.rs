//! Load config, open the store, restore the tracker, save it back.

use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use std::path::PathBuf;

use questlog::config::Config;
use questlog::progress::{ProgressEvent, ProgressTracker};
use questlog::snapshot::Snapshot;
use questlog::store::{open_store, SnapshotStore};

/// Global flags shared by every command
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub config_path: Option<PathBuf>,
    pub user: Option<String>,
}

impl Context {
    pub fn load_config(&self) -> Result<Config> {
        Config::load_from(self.config_path.as_deref())
    }
}

/// One user's progress, open for reading and writing
pub struct Session {
    pub user_id: String,
    pub tracker: ProgressTracker,
    /// When the loaded snapshot was written, if there was one
    pub saved_at: Option<DateTime<Utc>>,
    store: Box<dyn SnapshotStore>,
}

impl Session {
    pub fn open(ctx: &Context) -> Result<Self> {
        let config = ctx.load_config()?;
        let user_id = ctx
            .user
            .clone()
            .unwrap_or_else(|| config.settings.user_id.clone());

        let store = open_configured_store(&config)?;
        let snapshot = store
            .load(&user_id)
            .with_context(|| format!("Failed to load progress for user '{user_id}'"))?;

        let saved_at = snapshot.as_ref().and_then(|s| s.updated_at);
        let tracker = match snapshot {
            Some(snapshot) => {
                ProgressTracker::from_snapshot(snapshot, config.rewards.clone(), config.curve)
            }
            None => {
                tracing::debug!(user_id, "No stored progress, starting fresh");
                ProgressTracker::new(config.rewards.clone(), config.curve)
            }
        };

        Ok(Self {
            user_id,
            tracker,
            saved_at,
            store,
        })
    }

    pub fn store(&self) -> &dyn SnapshotStore {
        self.store.as_ref()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.tracker.snapshot(Utc::now())
    }

    /// Save the tracker and release the store
    pub fn save(self) -> Result<()> {
        let snapshot = self.snapshot();
        self.store
            .save(&self.user_id, &snapshot)
            .with_context(|| format!("Failed to save progress for user '{}'", self.user_id))?;
        self.close()
    }

    pub fn close(self) -> Result<()> {
        self.store.close().context("Failed to close store")
    }
}

/// Open the backend named in `config` under its data directory
pub fn open_configured_store(config: &Config) -> Result<Box<dyn SnapshotStore>> {
    let data_dir = config.data_dir();
    open_store(config.settings.backend, &data_dir).with_context(|| {
        format!(
            "Failed to open {} store in {}",
            config.settings.backend.as_str(),
            data_dir.display()
        )
    })
}

/// Print events one per line
pub fn print_events(events: &[ProgressEvent]) {
    if events.is_empty() {
        println!("Nothing changed.");
        return;
    }
    for event in events {
        println!("  {event}");
    }
}
