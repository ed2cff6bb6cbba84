//! Health check handlers

use axum::Json;
use chrono::{SecondsFormat, Utc};
use shared::HealthResponse;

/// Health check endpoint handler
///
/// Never touches the upstream, so it reports OK even while CWA is down.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
