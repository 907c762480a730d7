use std::sync::Arc;

use common::req::{empty_telemetry, LatestResponse, Status};
use serde_json::Value;

use crate::store::SnapshotStore;

/// Read side of the store. Always succeeds.
pub struct QueryService {
    store: Arc<SnapshotStore>,
}

impl QueryService {
    pub fn new(store: Arc<SnapshotStore>) -> Self {
        Self { store }
    }

    pub fn latest(&self) -> LatestResponse {
        let data = match self.store.get() {
            Some(snapshot) => Value::Object(snapshot.payload.clone()),
            None => empty_telemetry(),
        };

        LatestResponse {
            status: Status::Success,
            data,
        }
    }
}
