//! Player directory: player ID -> display name, loaded once per process.
//!
//! The full `/players/nfl` payload is several megabytes, so the directory is
//! built on first demand and shared for the lifetime of the process. An
//! optional on-disk snapshot lets a fresh process skip the download.

use rayon::prelude::*;
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::{
    cli::types::PlayerId,
    core::cache::{read_if_fresh, write_string},
    sleeper::{types::PlayerPayload, SleeperApi},
    Result, SleeperError,
};

/// Read-only mapping from player ID to display name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerDirectory {
    names: HashMap<PlayerId, String>,
}

impl PlayerDirectory {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the directory from the raw payload, skipping nameless records.
    pub fn from_payload(payload: PlayerPayload) -> Self {
        let names = payload
            .into_par_iter()
            .filter_map(|(id, record)| record.display_name().map(|name| (PlayerId::new(id), name)))
            .collect();
        Self { names }
    }

    pub fn name(&self, id: &PlayerId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(PlayerId, String)> for PlayerDirectory {
    fn from_iter<I: IntoIterator<Item = (PlayerId, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

/// Once-initialised, shareable holder of the `PlayerDirectory`.
///
/// Concurrent first callers wait on the same in-flight load, so the payload
/// is downloaded at most once. A failed load leaves the cell empty and the
/// next caller retries.
pub struct PlayerDirectoryCache {
    api: Arc<dyn SleeperApi>,
    snapshot: Option<PathBuf>,
    max_age: Duration,
    cell: OnceCell<Arc<PlayerDirectory>>,
}

impl PlayerDirectoryCache {
    pub fn new(api: Arc<dyn SleeperApi>, snapshot: Option<PathBuf>, max_age: Duration) -> Self {
        Self {
            api,
            snapshot,
            max_age,
            cell: OnceCell::new(),
        }
    }

    /// A cache that is already populated; `api` is never asked for players.
    pub fn preloaded(api: Arc<dyn SleeperApi>, directory: PlayerDirectory) -> Self {
        Self {
            api,
            snapshot: None,
            max_age: Duration::ZERO,
            cell: OnceCell::new_with(Some(Arc::new(directory))),
        }
    }

    pub fn snapshot_path(&self) -> Option<&PathBuf> {
        self.snapshot.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    /// The directory, loading it on first call.
    pub async fn get(&self) -> Result<Arc<PlayerDirectory>> {
        self.cell
            .get_or_try_init(|| self.load())
            .await
            .map(Arc::clone)
    }

    /// Download the payload regardless of any snapshot and rewrite the snapshot.
    ///
    /// The in-memory directory is only populated if it was still empty; a
    /// running process keeps the directory it started with.
    pub async fn refresh_snapshot(&self) -> Result<usize> {
        let directory = self.download().await?;
        let count = directory.len();
        if self.cell.set(directory).is_err() {
            debug!("Player directory already loaded; keeping the in-memory copy");
        }
        Ok(count)
    }

    async fn load(&self) -> Result<Arc<PlayerDirectory>> {
        if let Some(path) = self.snapshot.clone() {
            let max_age = self.max_age;
            if let Some(directory) = off_runtime(move || read_snapshot(&path, max_age)).await? {
                return Ok(Arc::new(directory));
            }
        }
        self.download().await
    }

    async fn download(&self) -> Result<Arc<PlayerDirectory>> {
        info!("Downloading player directory");
        let payload = self.api.players().await?;

        let snapshot = self.snapshot.clone();
        let directory = off_runtime(move || {
            if let Some(path) = snapshot {
                if let Err(e) = write_snapshot(&path, &payload) {
                    warn!(error = %e, "Player snapshot not saved");
                }
            }
            PlayerDirectory::from_payload(payload)
        })
        .await?;

        info!(players = directory.len(), "Player directory ready");
        Ok(Arc::new(directory))
    }
}

/// Run file I/O, JSON parsing and the rayon build on the blocking pool.
async fn off_runtime<T, F>(work: F) -> Result<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| SleeperError::Cache {
            message: format!("player directory task failed: {}", e),
        })
}

fn read_snapshot(path: &Path, max_age: Duration) -> Option<PlayerDirectory> {
    let contents = read_if_fresh(path, max_age)?;
    match serde_json::from_str::<PlayerPayload>(&contents) {
        Ok(payload) => {
            let directory = PlayerDirectory::from_payload(payload);
            info!(path = %path.display(), players = directory.len(), "Loaded player snapshot");
            Some(directory)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Ignoring unreadable player snapshot");
            None
        }
    }
}

/// Store the raw `/players/nfl` payload at `path`.
pub fn write_snapshot(path: &Path, payload: &PlayerPayload) -> Result<()> {
    let json = serde_json::to_string(payload).map_err(|e| SleeperError::Cache {
        message: format!("serializing player snapshot: {}", e),
    })?;
    write_string(path, &json).map_err(|e| SleeperError::Cache {
        message: format!("writing {}: {}", path.display(), e),
    })
}
