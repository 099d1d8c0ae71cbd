//! Device position lookup.

use async_trait::async_trait;

use crate::types::{Coordinate, GeolocationError, LocationError};

/// A source of the device's current position.
#[async_trait]
pub trait Geolocator: Send + Sync {
    /// Whether this device can provide a position at all.
    fn is_available(&self) -> bool;

    /// Ask for the current position.
    async fn current_position(&self) -> Result<Coordinate, GeolocationError>;
}

/// Resolve the user's position from a geolocator.
///
/// An unavailable geolocator is never queried.
pub async fn resolve_by_geolocation(
    geolocator: &dyn Geolocator,
) -> Result<Coordinate, LocationError> {
    if !geolocator.is_available() {
        tracing::warn!("Geolocation requested but not supported");
        return Err(LocationError::UnsupportedCapability);
    }

    let coord = geolocator.current_position().await?;
    tracing::info!("Got location: {}, {}", coord.latitude, coord.longitude);
    Ok(coord)
}

/// Geolocator backed by a fixed, configured position.
///
/// Terminal front-ends have no location service; a position from the
/// config file stands in for one. Without it, geolocation is unsupported.
#[derive(Debug, Clone, Default)]
pub struct FixedGeolocator {
    position: Option<Coordinate>,
}

impl FixedGeolocator {
    pub fn new(position: Option<Coordinate>) -> Self {
        Self { position }
    }
}

#[async_trait]
impl Geolocator for FixedGeolocator {
    fn is_available(&self) -> bool {
        self.position.is_some()
    }

    async fn current_position(&self) -> Result<Coordinate, GeolocationError> {
        self.position.ok_or(GeolocationError::PositionUnavailable)
    }
}
