//! Error handling for the Taiwan Weather Proxy
//!
//! Every failure leaves the service as a JSON `{ error, message, details? }`
//! body. Internal detail (transport errors, parse errors) is logged here and
//! never sent to the client.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::{ErrorBody, UpstreamErrorBody};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("CWA API key is not configured")]
    Configuration,

    #[error("Unknown city: {0}")]
    UnknownCity(String),

    #[error("No forecast location returned for {0}")]
    LocationNotFound(String),

    #[error("CWA API returned {status}: {message}")]
    UpstreamHttp {
        status: u16,
        message: String,
        details: UpstreamErrorBody,
    },

    #[error("CWA API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed upstream data: {0}")]
    MalformedUpstreamData(String),

    #[error("Route not found: {0}")]
    RouteNotFound(String),

    #[error("{0}")]
    Unhandled(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UnknownCity(_) | AppError::LocationNotFound(_) | AppError::RouteNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            AppError::UpstreamHttp { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::Configuration
            | AppError::Transport(_)
            | AppError::MalformedUpstreamData(_)
            | AppError::Unhandled(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            AppError::Configuration => ErrorBody::new(
                "Configuration Error",
                "CWA API key is not configured. Set the CWA_API_KEY environment variable and restart the server.",
            ),
            AppError::UnknownCity(slug) => ErrorBody::new(
                "City Not Found",
                format!("Unsupported city: {}", slug),
            ),
            AppError::LocationNotFound(name) => ErrorBody::new(
                "Location Not Found",
                format!("No forecast data available for {}", name),
            ),
            AppError::UpstreamHttp {
                message, details, ..
            } => ErrorBody::new("CWA API Error", message.clone()).with_details(details.clone()),
            AppError::Transport(_) => ErrorBody::new(
                "Internal Server Error",
                "Unable to reach the weather service",
            ),
            AppError::MalformedUpstreamData(_) => ErrorBody::new(
                "Internal Server Error",
                "The weather service returned data in an unexpected format",
            ),
            AppError::RouteNotFound(_) => {
                ErrorBody::new("Not Found", "The requested endpoint does not exist")
            }
            AppError::Unhandled(err) => ErrorBody::new("Internal Server Error", err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log the error for debugging
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "Error: {:?}", self);
        } else {
            tracing::warn!(status = status.as_u16(), "Error: {}", self);
        }

        (status, Json(self.body())).into_response()
    }
}

/// Turn a panic inside a handler into an unhandled-error response
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    AppError::Unhandled(anyhow::anyhow!(message)).into_response()
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::Configuration.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            AppError::UnknownCity("Atlantis".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::LocationNotFound("臺北市".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::MalformedUpstreamData("short".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::RouteNotFound("/nope".into()).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_upstream_status_is_mirrored() {
        let err = AppError::UpstreamHttp {
            status: 503,
            message: "Service Unavailable".into(),
            details: UpstreamErrorBody::default(),
        };
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);

        let bogus = AppError::UpstreamHttp {
            status: 1000,
            message: String::new(),
            details: UpstreamErrorBody::default(),
        };
        assert_eq!(bogus.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_unknown_city_echoes_slug() {
        let body = AppError::UnknownCity("TaiPeiX".into()).body();
        assert!(body.message.contains("TaiPeiX"));
        assert!(body.details.is_none());
    }

    #[test]
    fn test_upstream_details_forwarded() {
        let err = AppError::UpstreamHttp {
            status: 401,
            message: "Unauthorized".into(),
            details: UpstreamErrorBody(json!({ "message": "Unauthorized" })),
        };
        let body = err.body();
        assert_eq!(body.message, "Unauthorized");
        assert_eq!(body.details.unwrap().0, json!({ "message": "Unauthorized" }));
    }

    #[test]
    fn test_unhandled_echoes_message() {
        let body = AppError::Unhandled(anyhow::anyhow!("boom")).body();
        assert_eq!(body.message, "boom");
    }

    #[test]
    fn test_panic_payloads() {
        let response = handle_panic(Box::new("static panic"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = handle_panic(Box::new(String::from("owned panic")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
