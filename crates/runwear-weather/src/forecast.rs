//! Normalization of the hourly forecast payload into a [`ForecastRecord`].

use serde::Deserialize;
use serde_json::Value;

use crate::types::{ForecastRecord, WeatherError};

/// Hourly forecast payload exactly as received.
///
/// Kept untyped so that shape problems surface from [`normalize`] as named
/// errors instead of as deserialization failures mid-fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct RawForecast(Value);

impl RawForecast {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPeriod {
    temperature: f64,
    temperature_unit: String,
    short_forecast: String,
    wind_speed: String,
    probability_of_precipitation: QuantitativeValue,
}

#[derive(Debug, Deserialize)]
struct QuantitativeValue {
    value: Option<f64>,
}

/// Extract the current (first) period.
pub fn normalize(raw: &RawForecast) -> Result<ForecastRecord, WeatherError> {
    let first = raw
        .as_value()
        .pointer("/properties/periods")
        .and_then(Value::as_array)
        .and_then(|periods| periods.first())
        .ok_or(WeatherError::NoForecastPeriods)?;

    let period = RawPeriod::deserialize(first)
        .map_err(|e| WeatherError::Parse(format!("forecast period: {}", e)))?;

    Ok(ForecastRecord {
        temperature: period.temperature,
        temperature_unit: period.temperature_unit,
        short_forecast: period.short_forecast,
        wind_speed: period.wind_speed,
        // null means the service has no estimate for this hour
        probability_of_precipitation: period.probability_of_precipitation.value.unwrap_or(0.0),
    })
}
