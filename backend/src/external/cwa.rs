//! CWA open-data API client
//!
//! Fetches the 36-hour county forecast (dataset F-C0032-001) for one location

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use shared::UpstreamErrorBody;

use crate::config::CwaConfig;
use crate::error::{AppError, AppResult};

/// Dataset path for the 36-hour county forecast
pub const FORECAST_DATASET_PATH: &str = "/v1/rest/datastore/F-C0032-001";

/// CWA API client
#[derive(Clone)]
pub struct CwaClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

/// The forecast location selected from an upstream response
#[derive(Debug, Clone)]
pub struct ForecastRecord {
    pub dataset_description: String,
    pub location: CwaLocation,
}

/// CWA API response envelope
#[derive(Debug, Deserialize)]
struct CwaEnvelope {
    records: Option<CwaRecords>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CwaRecords {
    #[serde(default)]
    dataset_description: String,
    location: Option<Vec<CwaLocation>>,
}

/// One location with its weather elements
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CwaLocation {
    pub location_name: String,
    #[serde(default)]
    pub weather_element: Vec<CwaWeatherElement>,
}

/// A time series for a single element code (Wx, PoP, MinT, ...)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CwaWeatherElement {
    pub element_name: String,
    #[serde(default)]
    pub time: Vec<CwaTimeEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CwaTimeEntry {
    pub start_time: String,
    pub end_time: String,
    pub parameter: CwaParameter,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CwaParameter {
    pub parameter_name: String,
    #[serde(default)]
    pub parameter_unit: Option<String>,
}

impl CwaEnvelope {
    /// Select the first returned location
    fn into_record(self, location_name: &str) -> AppResult<ForecastRecord> {
        let records = self
            .records
            .ok_or_else(|| AppError::LocationNotFound(location_name.to_string()))?;

        let location = records
            .location
            .and_then(|locations| locations.into_iter().next())
            .ok_or_else(|| AppError::LocationNotFound(location_name.to_string()))?;

        Ok(ForecastRecord {
            dataset_description: records.dataset_description,
            location,
        })
    }
}

impl CwaClient {
    /// Create a new CwaClient from configuration
    pub fn new(config: &CwaConfig) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: config
                .api_key
                .as_deref()
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(str::to_owned),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the forecast for a localized CWA location name
    pub async fn fetch_forecast(&self, location_name: &str) -> AppResult<ForecastRecord> {
        let api_key = self.api_key.as_deref().ok_or(AppError::Configuration)?;
        let url = format!("{}{}", self.base_url, FORECAST_DATASET_PATH);

        tracing::debug!(location = location_name, "Requesting CWA forecast");

        let response = self
            .client
            .get(&url)
            .query(&[("Authorization", api_key), ("locationName", location_name)])
            .send()
            .await
            .map_err(|e| transport_error(e, location_name))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_else(|e| {
                tracing::warn!(
                    status = status.as_u16(),
                    location = location_name,
                    "Failed to read CWA error body: {}",
                    e.without_url()
                );
                Default::default()
            });
            let details = UpstreamErrorBody::from_bytes(&body);
            let message = details
                .message()
                .map(str::to_owned)
                .unwrap_or_else(|| "Failed to fetch weather data from CWA".to_string());

            tracing::warn!(
                status = status.as_u16(),
                location = location_name,
                "CWA API returned an error"
            );

            return Err(AppError::UpstreamHttp {
                status: status.as_u16(),
                message,
                details,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(e, location_name))?;
        let envelope: CwaEnvelope = serde_json::from_slice(&body).map_err(|e| {
            AppError::MalformedUpstreamData(format!("Failed to parse forecast response: {}", e))
        })?;

        envelope.into_record(location_name)
    }
}

/// Request URLs carry the API key; strip them before the error is logged
fn transport_error(err: reqwest::Error, location_name: &str) -> AppError {
    let err = err.without_url();
    tracing::warn!(
        location = location_name,
        timeout = err.is_timeout(),
        "CWA API unreachable: {}",
        err
    );
    AppError::Transport(err)
}
