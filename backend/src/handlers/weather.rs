//! HTTP handlers for weather endpoints

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::Uri,
    Json,
};
use shared::{ApiResponse, WeatherResponse};

use crate::error::{AppError, AppResult};
use crate::services::WeatherService;
use crate::AppState;

/// Get the normalized forecast for a city slug
pub async fn get_city_weather(
    State(state): State<AppState>,
    uri: Uri,
    city_slug: Result<Path<String>, PathRejection>,
) -> AppResult<Json<ApiResponse<WeatherResponse>>> {
    // A slug that cannot be decoded is echoed in its raw, encoded form
    let Path(city_slug) = city_slug.map_err(|_| {
        AppError::UnknownCity(uri.path().rsplit('/').next().unwrap_or_default().to_string())
    })?;

    let service = WeatherService::new(state.cities, state.cwa_client);
    let forecast = service.get_city_forecast(&city_slug).await?;
    Ok(Json(ApiResponse::ok(forecast)))
}
