//! Route definitions for the Taiwan Weather Proxy

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
///
/// Unsupported methods on a known path get the same JSON 404 as unknown paths.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/health",
            get(handlers::health_check).fallback(handlers::not_found),
        )
        .route(
            "/weather/:city_slug",
            get(handlers::get_city_weather).fallback(handlers::not_found),
        )
}
