use super::MarketSnapshot;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot source unreadable: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot data malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("snapshot store unavailable: {0}")]
    Unavailable(String),
}

/// Backend holding dated market snapshots.
pub trait SnapshotStore: Send + Sync {
    /// The record with the latest date, or `None` when nothing was recorded.
    fn latest(&self) -> Result<Option<MarketSnapshot>, SnapshotError>;
}

fn most_recent(records: impl IntoIterator<Item = MarketSnapshot>) -> Option<MarketSnapshot> {
    records.into_iter().max_by_key(|snapshot| snapshot.date)
}

#[derive(Debug, Default, Clone)]
pub struct InMemorySnapshotStore {
    records: Arc<RwLock<Vec<MarketSnapshot>>>,
}

impl InMemorySnapshotStore {
    pub fn new(records: Vec<MarketSnapshot>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    pub fn record(&self, snapshot: MarketSnapshot) -> Result<(), SnapshotError> {
        let mut guard = self
            .records
            .write()
            .map_err(|_| SnapshotError::Unavailable("snapshot lock poisoned".to_string()))?;
        guard.push(snapshot);
        Ok(())
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn latest(&self) -> Result<Option<MarketSnapshot>, SnapshotError> {
        let guard = self
            .records
            .read()
            .map_err(|_| SnapshotError::Unavailable("snapshot lock poisoned".to_string()))?;
        Ok(most_recent(guard.iter().cloned()))
    }
}

/// Reads a JSON array of snapshots from disk on every call.
#[derive(Debug, Clone)]
pub struct JsonFileSnapshotStore {
    path: PathBuf,
}

impl JsonFileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotStore for JsonFileSnapshotStore {
    fn latest(&self) -> Result<Option<MarketSnapshot>, SnapshotError> {
        let raw = std::fs::read_to_string(&self.path)?;
        let records: Vec<MarketSnapshot> = serde_json::from_str(&raw)?;
        Ok(most_recent(records))
    }
}
