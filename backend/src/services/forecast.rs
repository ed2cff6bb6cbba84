//! Forecast normalization
//!
//! Reindexes the CWA per-element time series into one record per time slot.

use shared::{ForecastSlot, WeatherResponse};

use crate::error::{AppError, AppResult};
use crate::external::cwa::{CwaLocation, CwaParameter};

/// Unit marker CWA uses for probability of precipitation
pub const PERCENT_UNIT: &str = "百分比";

/// Unit marker CWA uses for temperatures
pub const CELSIUS_UNIT: &str = "C";

/// Weather element codes of the F-C0032-001 dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementCode {
    /// Weather phenomenon
    Wx,
    /// Probability of precipitation
    PoP,
    MinT,
    MaxT,
    /// Comfort index
    CI,
    /// Wind speed
    WS,
}

impl ElementCode {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Wx" => Some(ElementCode::Wx),
            "PoP" => Some(ElementCode::PoP),
            "MinT" => Some(ElementCode::MinT),
            "MaxT" => Some(ElementCode::MaxT),
            "CI" => Some(ElementCode::CI),
            "WS" => Some(ElementCode::WS),
            _ => None,
        }
    }

    /// Write a parameter into the slot field this code owns
    fn apply(self, slot: &mut ForecastSlot, parameter: &CwaParameter) {
        let value = || parameter.parameter_name.clone();
        match self {
            ElementCode::Wx => slot.weather = value(),
            ElementCode::PoP => slot.rain = with_unit_suffix(parameter, PERCENT_UNIT, "%"),
            ElementCode::MinT => slot.min_temp = with_unit_suffix(parameter, CELSIUS_UNIT, "°"),
            ElementCode::MaxT => slot.max_temp = with_unit_suffix(parameter, CELSIUS_UNIT, "°"),
            ElementCode::CI => slot.comfort = value(),
            ElementCode::WS => slot.wind_speed = value(),
        }
    }
}

fn with_unit_suffix(parameter: &CwaParameter, unit: &str, suffix: &str) -> String {
    if parameter.parameter_unit.as_deref() == Some(unit) {
        format!("{}{}", parameter.parameter_name, suffix)
    } else {
        parameter.parameter_name.clone()
    }
}

/// Flatten an upstream location into the client response
///
/// The slot count and the slot boundaries come from the first weather
/// element. Every element must carry at least that many entries.
pub fn normalize(location: &CwaLocation, dataset_description: &str) -> AppResult<WeatherResponse> {
    let Some(first) = location.weather_element.first() else {
        return Ok(WeatherResponse {
            city: location.location_name.clone(),
            update_time: dataset_description.to_string(),
            forecasts: Vec::new(),
        });
    };
    let time_count = first.time.len();

    if let Some(short) = location
        .weather_element
        .iter()
        .find(|element| element.time.len() < time_count)
    {
        return Err(AppError::MalformedUpstreamData(format!(
            "element {} has {} time entries, expected {}",
            short.element_name,
            short.time.len(),
            time_count
        )));
    }

    let forecasts = first
        .time
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let mut slot = ForecastSlot::new(entry.start_time.clone(), entry.end_time.clone());
            for element in &location.weather_element {
                if let Some(code) = ElementCode::parse(&element.element_name) {
                    code.apply(&mut slot, &element.time[i].parameter);
                }
            }
            slot
        })
        .collect();

    Ok(WeatherResponse {
        city: location.location_name.clone(),
        update_time: dataset_description.to_string(),
        forecasts,
    })
}
