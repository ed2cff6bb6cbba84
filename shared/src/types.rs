//! Response envelopes used across the API

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Successful API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Error body returned for every failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<UpstreamErrorBody>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: UpstreamErrorBody) -> Self {
        self.details = Some(details);
        self
    }
}

/// Error body received from the upstream, forwarded without validation
///
/// The inner shape is defined by the upstream. Non-JSON bodies are kept as a
/// JSON string.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct UpstreamErrorBody(pub serde_json::Value);

impl UpstreamErrorBody {
    /// Parse raw upstream bytes, falling back to the text itself
    pub fn from_bytes(bytes: &[u8]) -> Self {
        match serde_json::from_slice(bytes) {
            Ok(value) => Self(value),
            Err(_) if bytes.is_empty() => Self(serde_json::Value::Null),
            Err(_) => Self(serde_json::Value::String(
                String::from_utf8_lossy(bytes).into_owned(),
            )),
        }
    }

    /// The upstream's own `message` field, if it sent one
    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(|m| m.as_str())
    }
}

/// Health check payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// Payload served at the API root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
    pub version: String,
    pub endpoints: BTreeMap<String, String>,
    pub cities: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_upstream_body_json() {
        let body = UpstreamErrorBody::from_bytes(br#"{"message":"Resource not found"}"#);
        assert_eq!(body.message(), Some("Resource not found"));
    }

    #[test]
    fn test_upstream_body_plain_text() {
        let body = UpstreamErrorBody::from_bytes(b"Service Unavailable");
        assert_eq!(body.0, json!("Service Unavailable"));
        assert_eq!(body.message(), None);
    }

    #[test]
    fn test_upstream_body_empty() {
        let body = UpstreamErrorBody::from_bytes(b"");
        assert_eq!(body.0, serde_json::Value::Null);
    }

    #[test]
    fn test_error_body_omits_missing_details() {
        let value = serde_json::to_value(ErrorBody::new("Not Found", "nothing here")).unwrap();
        assert_eq!(value, json!({ "error": "Not Found", "message": "nothing here" }));
    }

    #[test]
    fn test_error_body_forwards_details_verbatim() {
        let details = UpstreamErrorBody(json!({ "message": "down", "code": 42 }));
        let value =
            serde_json::to_value(ErrorBody::new("Upstream API Error", "down").with_details(details))
                .unwrap();
        assert_eq!(value["details"], json!({ "message": "down", "code": 42 }));
    }

    #[test]
    fn test_api_response_envelope() {
        let value = serde_json::to_value(ApiResponse::ok(json!({ "a": 1 }))).unwrap();
        assert_eq!(value, json!({ "success": true, "data": { "a": 1 } }));
    }
}
