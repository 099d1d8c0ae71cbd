//! ZIP code geocoding: convert a US ZIP code to coordinates.
//! Uses Zippopotam.us - free, no API key required.

use reqwest::Client;
use serde_json::Value;
use tracing::instrument;

use crate::http::get_json;
use crate::types::{Coordinate, LocationError, WeatherError};

/// Trim `input` and check it is exactly five ASCII digits.
pub fn parse_zip(input: &str) -> Result<&str, LocationError> {
    let zip = input.trim();
    if zip.len() == 5 && zip.chars().all(|c| c.is_ascii_digit()) {
        Ok(zip)
    } else {
        Err(LocationError::InvalidZip(input.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct ZipGeocoder {
    client: Client,
    base_url: String,
}

impl ZipGeocoder {
    /// `base_url` is the lookup prefix the ZIP is appended to,
    /// e.g. `https://api.zippopotam.us/us/`.
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn url_for(&self, zip: &str) -> String {
        format!("{}{}", self.base_url, urlencoding::encode(zip))
    }

    /// Look up the coordinates of an already validated ZIP code.
    #[instrument(skip(self), level = "info")]
    pub async fn lookup(&self, zip: &str) -> Result<Coordinate, WeatherError> {
        let body: Value = get_json(&self.client, &self.url_for(zip)).await?;
        let coord = coordinate_from_places(&body)?;

        tracing::info!(
            "ZIP {} resolved to {:.4}, {:.4}",
            zip,
            coord.latitude,
            coord.longitude
        );
        Ok(coord)
    }
}

/// First entry of `places`; latitude/longitude arrive as strings.
fn coordinate_from_places(body: &Value) -> Result<Coordinate, LocationError> {
    let place = body
        .get("places")
        .and_then(Value::as_array)
        .and_then(|places| places.first())
        .ok_or(LocationError::InvalidLocationData)?;

    let latitude = parse_degrees(place.get("latitude"));
    let longitude = parse_degrees(place.get("longitude"));

    match (latitude, longitude) {
        (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => {
            Ok(Coordinate::new(lat, lon))
        }
        _ => {
            tracing::warn!("Geocoding returned unusable place: {}", place);
            Err(LocationError::InvalidLocationData)
        }
    }
}

fn parse_degrees(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}
