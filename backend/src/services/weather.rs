//! Weather service: resolve, fetch, normalize

use std::sync::Arc;

use shared::WeatherResponse;

use crate::error::AppResult;
use crate::external::CwaClient;
use crate::services::{city::CityService, forecast};

/// Weather service for a single request
#[derive(Clone)]
pub struct WeatherService {
    cities: Arc<CityService>,
    cwa_client: CwaClient,
}

impl WeatherService {
    pub fn new(cities: Arc<CityService>, cwa_client: CwaClient) -> Self {
        Self { cities, cwa_client }
    }

    /// Forecast for a city slug
    ///
    /// Makes at most one upstream call; nothing is retried.
    #[tracing::instrument(skip(self))]
    pub async fn get_city_forecast(&self, city_slug: &str) -> AppResult<WeatherResponse> {
        let location_name = self.cities.resolve(city_slug)?;
        let record = self.cwa_client.fetch_forecast(location_name).await?;
        let response = forecast::normalize(&record.location, &record.dataset_description)?;

        tracing::info!(
            location = location_name,
            slots = response.forecasts.len(),
            "Forecast served"
        );

        Ok(response)
    }
}
