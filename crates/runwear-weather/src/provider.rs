use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use crate::forecast::RawForecast;
use crate::http::get_json;
use crate::types::{Coordinate, WeatherError};

#[derive(Debug, Deserialize)]
struct PointsResponse {
    properties: PointsProperties,
}

#[derive(Debug, Deserialize)]
struct PointsProperties {
    #[serde(rename = "forecastHourly")]
    forecast_hourly: String,
}

/// Two-hop api.weather.gov client: points lookup, then hourly forecast.
#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Client,
    points_base_url: String,
}

impl WeatherProvider {
    /// `points_base_url` is the prefix `lat,lon` is appended to,
    /// e.g. `https://api.weather.gov/points/`.
    pub fn new(client: Client, points_base_url: impl Into<String>) -> Self {
        Self {
            client,
            points_base_url: points_base_url.into(),
        }
    }

    pub fn points_url(&self, coord: &Coordinate) -> String {
        format!("{}{}", self.points_base_url, coord.to_points_path())
    }

    /// Fetch the raw hourly forecast for `coord`.
    ///
    /// Out-of-range coordinates fail before any request is made.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch(&self, coord: &Coordinate) -> Result<RawForecast, WeatherError> {
        if !coord.is_valid() {
            return Err(WeatherError::InvalidCoordinate {
                latitude: coord.latitude,
                longitude: coord.longitude,
            });
        }

        let points: PointsResponse = get_json(&self.client, &self.points_url(coord)).await?;
        let forecast_url = points.properties.forecast_hourly;
        tracing::debug!("Hourly forecast endpoint: {}", forecast_url);

        let raw: Value = get_json(&self.client, &forecast_url).await?;
        tracing::info!("Fetched hourly forecast for {}", coord.to_points_path());
        Ok(RawForecast::new(raw))
    }
}
