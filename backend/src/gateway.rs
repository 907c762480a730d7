use std::sync::Arc;

use log::{info, warn};
use serde_json::Value;

use crate::{store::SnapshotStore, utils::iso_timestamp};

const UNKNOWN_DEVICE: &str = "unknown";
const DEFAULT_MAX_BODY: usize = 64 * 1024;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IngestError {
    #[error("API key inválida")]
    Unauthorized,

    #[error("{0}")]
    BadRequest(String),
}

/// The only write path into the [`SnapshotStore`].
pub struct IngestGateway {
    api_key: String,
    max_body: usize, // bytes
    store: Arc<SnapshotStore>,
}

impl IngestGateway {
    pub fn new(api_key: impl Into<String>, store: Arc<SnapshotStore>) -> Self {
        Self {
            api_key: api_key.into(),
            max_body: DEFAULT_MAX_BODY,
            store,
        }
    }

    pub fn with_max_body(mut self, max_body: usize) -> Self {
        self.max_body = max_body;
        self
    }

    pub fn max_body(&self) -> usize {
        self.max_body
    }

    pub fn authorize(&self, supplied_key: Option<&str>) -> Result<(), IngestError> {
        if supplied_key != Some(self.api_key.as_str()) {
            warn!("rejected telemetry: invalid api key");
            return Err(IngestError::Unauthorized);
        }
        Ok(())
    }

    /// Checks the key first, then the body; nothing is stored unless both pass.
    pub fn ingest(&self, supplied_key: Option<&str>, body: &[u8]) -> Result<(), IngestError> {
        self.authorize(supplied_key)?;

        if body.len() > self.max_body {
            return Err(too_large());
        }

        let payload = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(map)) => map,
            Ok(_) => return Err(reject("payload must be a JSON object".to_string())),
            Err(e) => return Err(reject(e.to_string())),
        };

        let device = device_name(payload.get("device_id"));
        let stored = self.store.put(payload);
        if stored.first {
            info!("first snapshot stored");
        }
        info!(
            "telemetry received from {device} at {}",
            iso_timestamp(stored.snapshot.received_at)
        );

        Ok(())
    }
}

pub fn too_large() -> IngestError {
    reject("payload too large".to_string())
}

fn reject(reason: String) -> IngestError {
    warn!("rejected telemetry: {reason}");
    IngestError::BadRequest(reason)
}

fn device_name(id: Option<&Value>) -> String {
    match id {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => UNKNOWN_DEVICE.to_string(),
        Some(other) => other.to_string(),
    }
}
