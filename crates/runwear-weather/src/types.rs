use runwear_core::NetworkError;
use serde::{Deserialize, Serialize};

/// Geographic position of the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Both values finite and within latitude/longitude range.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// `lat,lon` with 4 decimal places, as used by the points lookup.
    pub fn to_points_path(&self) -> String {
        format!("{:.4},{:.4}", self.latitude, self.longitude)
    }
}

/// The current forecast period, flattened from the upstream payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRecord {
    pub temperature: f64,
    pub temperature_unit: String,
    pub short_forecast: String,
    /// Free text such as "10 mph" or "5 to 10 mph"
    pub wind_speed: String,
    /// Percent chance, 0-100
    pub probability_of_precipitation: f64,
}

/// Body sent to the clothing recommendation backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub temp: f64,
    #[serde(rename = "windSpeed")]
    pub wind_speed: f64,
}

/// Clothing images returned by the backend, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    #[serde(rename = "imageUrls")]
    pub image_urls: Vec<String>,
}

/// Failure reported by a device location service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeolocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location unavailable")]
    PositionUnavailable,
    #[error("Location request timed out")]
    Timeout,
    #[error("Unknown location error")]
    Unknown,
}

impl GeolocationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::PermissionDenied => "User denied request for geolocation.",
            Self::PositionUnavailable => "Location data is not available.",
            Self::Timeout => "The request for location data timed out.",
            Self::Unknown => "An unknown error occurred.",
        }
    }
}

/// Location resolution errors
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("Geolocation is not supported")]
    UnsupportedCapability,
    #[error("Geolocation failed: {0}")]
    Geolocation(#[from] GeolocationError),
    #[error("Invalid ZIP code: {0:?}")]
    InvalidZip(String),
    #[error("Invalid location data received")]
    InvalidLocationData,
}

impl LocationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::UnsupportedCapability => "Geolocation is not supported on this device.",
            Self::Geolocation(e) => e.user_message(),
            Self::InvalidZip(_) => "Please enter a valid 5-digit ZIP code.",
            Self::InvalidLocationData => "Invalid location data received.",
        }
    }
}

/// Weather pipeline errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),
    #[error("Location error: {0}")]
    Location(#[from] LocationError),
    #[error("Invalid coordinate: {latitude}, {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
    #[error("No forecast periods available")]
    NoForecastPeriods,
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Malformed recommendation response: {0}")]
    MalformedRecommendation(String),
}

impl WeatherError {
    /// HTTP status of the failed upstream call, if that is what failed.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Whether the page can still show the forecast despite this error.
    pub fn is_degradable(&self) -> bool {
        matches!(self, Self::MalformedRecommendation(_))
    }
}
