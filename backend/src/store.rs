use std::sync::{Arc, RwLock};

use chrono::{DateTime, Local};
use serde_json::{Map, Value};

use crate::utils::iso_timestamp;

pub const RECEIVED_AT: &str = "received_at";

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Device record as sent, plus the server's `received_at`.
    pub payload: Map<String, Value>,
    pub received_at: DateTime<Local>,
}

/// Result of [`SnapshotStore::put`].
#[derive(Debug, Clone)]
pub struct Stored {
    pub snapshot: Arc<Snapshot>,
    /// Set for exactly one `put`: the one that found the slot empty.
    pub first: bool,
}

/// Holds the most recent snapshot, if any device has reported yet.
///
/// Writers replace the whole `Arc`, readers clone it, so a reader holds either
/// the old record or the new one and never a mix of both.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    slot: RwLock<Option<Arc<Snapshot>>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, mut payload: Map<String, Value>) -> Stored {
        let received_at = Local::now();
        payload.insert(
            RECEIVED_AT.to_string(),
            Value::String(iso_timestamp(received_at)),
        );
        let snapshot = Arc::new(Snapshot {
            payload,
            received_at,
        });

        // the slot only ever holds a complete pointer, so a poisoned lock is still usable
        let mut slot = self.slot.write().unwrap_or_else(|e| e.into_inner());
        let previous = slot.replace(snapshot.clone());

        Stored {
            snapshot,
            first: previous.is_none(),
        }
    }

    pub fn get(&self) -> Option<Arc<Snapshot>> {
        self.slot.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}
