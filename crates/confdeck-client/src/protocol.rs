//! Wire types for the backend's HTTP API
//!
//! The backend is lenient by contract: a response body that fails to parse
//! as the expected shape is treated as an empty object (all fields absent),
//! never as a hard transport error distinct from the HTTP status.

use serde::{Deserialize, Serialize};

/// Successful body of `GET /api/file/{name}`.
///
/// `name` and `exists` are informational extras some backends send; only
/// `content` matters to the edit session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileResponse {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub exists: Option<bool>,
}

/// Request body of `POST /api/file/{name}`.
#[derive(Debug, Clone, Serialize)]
pub struct SaveRequest<'a> {
    pub content: &'a str,
}

/// Body of `POST /api/restart` and `GET /health`.
///
/// Restart success requires `ok: true` in addition to a 2xx status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AckResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Optional error envelope carried by failure responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Parse a body leniently into `T`, degrading to `T::default()` when the
/// body is not the expected shape.
pub(crate) fn parse_lenient<T: Default + for<'de> Deserialize<'de>>(body: &str) -> T {
    serde_json::from_str(body).unwrap_or_default()
}

/// Extract the backend's error message from a failure body, falling back
/// to the generic per-operation string.
pub(crate) fn error_message(body: &str, fallback: &str) -> String {
    let parsed: ErrorBody = parse_lenient(body);
    match parsed.error {
        Some(error) if !error.is_empty() => error,
        _ => fallback.to_string(),
    }
}
