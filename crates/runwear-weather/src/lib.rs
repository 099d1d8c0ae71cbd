//! Weather lookup for RunWear
//!
//! Resolves a position (device geolocation or US ZIP code), fetches the
//! hourly forecast from api.weather.gov, normalizes the current period and
//! asks the clothing backend what to wear.

pub mod forecast;
pub mod geocode;
pub mod http;
pub mod location;
pub mod provider;
pub mod recommend;
pub mod types;

pub use forecast::{normalize, RawForecast};
pub use geocode::{parse_zip, ZipGeocoder};
pub use location::{resolve_by_geolocation, FixedGeolocator, Geolocator};
pub use provider::WeatherProvider;
pub use recommend::RecommendationClient;
pub use types::*;
