// keep in sync with api.rs of backend
use serde_json::json;

pub const SERVICE_NAME: &str = "Hero Track Cloud";
pub const API_KEY_HEADER: &str = "X-API-Key";
pub const INVALID_API_KEY: &str = "API key inválida";

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Body of `POST /api/data`, for both the acknowledgement and the rejections.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct StatusResponse {
    pub status: Status,
    pub message: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: Status::Success,
            message: "OK".to_string(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct LatestResponse {
    pub status: Status,
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: String, // ISO-8601
}

/// What `/api/latest` reports before any device has reported.
///
/// Dashboards index into `boat`, `paddles` and `system` unconditionally, so
/// all three are always present.
pub fn empty_telemetry() -> serde_json::Value {
    json!({
        "boat": { "gps_valid": false },
        "paddles": [],
        "system": {},
    })
}
