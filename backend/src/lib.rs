//! Taiwan Weather Proxy
//!
//! Resolves a city slug to its CWA location name, fetches the 36-hour
//! forecast from the CWA open-data API and serves it as a flat JSON contract.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};

use external::CwaClient;
use services::CityService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub cities: Arc<CityService>,
    pub cwa_client: CwaClient,
}

impl AppState {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let cwa_client = CwaClient::new(&config.cwa)?;

        Ok(Self {
            cities: Arc::new(CityService::new()),
            cwa_client,
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    with_middleware(app_routes()).with_state(state)
}

/// Every route plus the JSON fallback for unrouted paths
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::root).fallback(handlers::not_found))
        .nest("/api", routes::api_routes())
        .fallback(handlers::not_found)
}

/// Wrap a router in the production middleware stack
pub fn with_middleware(router: Router<AppState>) -> Router<AppState> {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
