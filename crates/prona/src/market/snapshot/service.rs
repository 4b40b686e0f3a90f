use super::store::SnapshotStore;
use super::MarketSnapshot;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Outcome of a single snapshot fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SnapshotState {
    Ready { snapshot: MarketSnapshot },
    NoData,
    Unavailable { reason: String },
}

impl SnapshotState {
    pub fn snapshot(&self) -> Option<&MarketSnapshot> {
        match self {
            Self::Ready { snapshot } => Some(snapshot),
            Self::NoData | Self::Unavailable { .. } => None,
        }
    }
}

/// Fetches the most recent snapshot once per call. Failures are logged and
/// reported as [`SnapshotState::Unavailable`]; there is no retry.
pub struct MarketSnapshotService<S> {
    store: Arc<S>,
}

impl<S> Clone for MarketSnapshotService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: SnapshotStore + 'static> MarketSnapshotService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn current(&self) -> SnapshotState {
        match self.store.latest() {
            Ok(Some(snapshot)) => {
                debug!(snapshot_id = %snapshot.id, date = %snapshot.date, "market snapshot loaded");
                SnapshotState::Ready { snapshot }
            }
            Ok(None) => {
                debug!("no market snapshot recorded yet");
                SnapshotState::NoData
            }
            Err(err) => {
                warn!(error = %err, "market snapshot fetch failed");
                SnapshotState::Unavailable {
                    reason: err.to_string(),
                }
            }
        }
    }
}
