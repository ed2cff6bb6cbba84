//! API root and fallback handlers

use std::collections::BTreeMap;

use axum::{http::Uri, Json};
use shared::{city_slugs, WelcomeResponse};

use crate::error::AppError;

/// Welcome payload listing the available endpoints
pub async fn root() -> Json<WelcomeResponse> {
    let endpoints = BTreeMap::from([
        ("health".to_string(), "/api/health".to_string()),
        ("weather".to_string(), "/api/weather/:city".to_string()),
    ]);

    Json(WelcomeResponse {
        message: "Taiwan Weather Proxy API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints,
        cities: city_slugs().into_iter().map(String::from).collect(),
    })
}

/// Fallback for every unrouted path
pub async fn not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}
