//! Clothing recommendation backend client.

use reqwest::Client;
use runwear_core::ReqwestErrorExt;
use serde_json::Value;
use tracing::instrument;

use crate::http::ensure_success;
use crate::types::{ForecastRecord, RecommendationRequest, RecommendationResponse, WeatherError};

/// Leading numeric value of a free-text speed ("10 mph" -> 10, "5 to 10 mph" -> 5).
pub fn parse_wind_speed(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    for (i, c) in text.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }

    if !seen_digit {
        return None;
    }
    text[..end].trim_end_matches('.').parse().ok()
}

impl RecommendationRequest {
    /// Build the backend request from the current forecast.
    ///
    /// Unparseable wind speeds are sent as 0 (calm).
    pub fn from_record(record: &ForecastRecord) -> Self {
        let wind_speed = parse_wind_speed(&record.wind_speed).unwrap_or_else(|| {
            tracing::warn!("Unparseable wind speed {:?}, assuming calm", record.wind_speed);
            0.0
        });

        Self {
            temp: record.temperature,
            wind_speed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecommendationClient {
    client: Client,
    endpoint: String,
}

impl RecommendationClient {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// POST the request and return the image URLs in response order.
    ///
    /// A 2xx reply whose body is not `{"imageUrls": [string, ...]}` yields
    /// [`WeatherError::MalformedRecommendation`].
    #[instrument(skip(self), level = "info")]
    pub async fn fetch(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResponse, WeatherError> {
        tracing::debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(ReqwestErrorExt::into_network_error)?;

        let body = ensure_success(response)?
            .text()
            .await
            .map_err(ReqwestErrorExt::into_network_error)?;

        let response = parse_response(&body)?;
        tracing::info!("Received {} clothing recommendations", response.image_urls.len());
        Ok(response)
    }
}

fn parse_response(body: &str) -> Result<RecommendationResponse, WeatherError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| WeatherError::MalformedRecommendation(format!("body is not JSON: {}", e)))?;

    let urls = value
        .get("imageUrls")
        .and_then(Value::as_array)
        .ok_or_else(|| WeatherError::MalformedRecommendation("imageUrls is not a list".into()))?;

    let image_urls = urls
        .iter()
        .map(|url| url.as_str().map(str::to_string))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| {
            WeatherError::MalformedRecommendation("imageUrls contains a non-string".into())
        })?;

    Ok(RecommendationResponse { image_urls })
}
