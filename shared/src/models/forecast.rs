//! Forecast models returned to clients

use serde::{Deserialize, Serialize};

/// One forecast window with the six flattened weather fields
///
/// Every field is a display string. Fields whose weather element was missing
/// from the upstream data are empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSlot {
    pub start_time: String,
    pub end_time: String,
    pub weather: String,
    pub rain: String,
    pub min_temp: String,
    pub max_temp: String,
    pub comfort: String,
    pub wind_speed: String,
}

impl ForecastSlot {
    pub fn new(start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
            ..Default::default()
        }
    }
}

/// Normalized forecast for a single city
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherResponse {
    /// Location name as reported by the upstream
    pub city: String,
    /// Upstream dataset description
    pub update_time: String,
    /// Time slots in upstream order
    pub forecasts: Vec<ForecastSlot>,
}
