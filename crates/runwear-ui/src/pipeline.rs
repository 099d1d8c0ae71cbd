//! Location -> weather -> forecast -> recommendations, written to a [`Page`].
//!
//! Every entry point handles its own failures: user-facing problems are
//! alerted, upstream failures go through [`WeatherPipeline::report_error`],
//! and a malformed recommendation reply only replaces the recommendation
//! region with a fixed notice.

use std::sync::Arc;

use runwear_core::{Config, NetworkError};
use runwear_weather::http::build_client;
use runwear_weather::{
    location, normalize, parse_zip, Coordinate, ForecastRecord, Geolocator, RecommendationClient,
    RecommendationRequest, WeatherError, WeatherProvider, ZipGeocoder,
};

use crate::page::{ImageElement, Page};
use crate::render::render;

/// Status text shown when any stage of a run fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch weather data.";
/// Recommendation text shown when the backend reply is unusable.
pub const NO_RECOMMENDATIONS_MESSAGE: &str = "No clothing recommendations available.";

pub struct WeatherPipeline {
    page: Arc<dyn Page>,
    geocoder: ZipGeocoder,
    provider: WeatherProvider,
    recommender: RecommendationClient,
}

impl WeatherPipeline {
    pub fn new(
        page: Arc<dyn Page>,
        geocoder: ZipGeocoder,
        provider: WeatherProvider,
        recommender: RecommendationClient,
    ) -> Self {
        Self {
            page,
            geocoder,
            provider,
            recommender,
        }
    }

    /// Build all clients from the configured endpoints, sharing one HTTP client.
    pub fn from_config(page: Arc<dyn Page>, config: &Config) -> Result<Self, NetworkError> {
        let client = build_client(&config.http)?;
        let endpoints = &config.endpoints;

        Ok(Self::new(
            page,
            ZipGeocoder::new(client.clone(), endpoints.geocoding_url.as_str()),
            WeatherProvider::new(client.clone(), endpoints.weather_points_url.as_str()),
            RecommendationClient::new(client, endpoints.recommendation_url.as_str()),
        ))
    }

    pub fn page(&self) -> &Arc<dyn Page> {
        &self.page
    }

    /// Run the pipeline from the device position.
    pub async fn resolve_by_geolocation(&self, geolocator: &dyn Geolocator) {
        match location::resolve_by_geolocation(geolocator).await {
            Ok(coord) => self.fetch_and_display(coord).await,
            Err(e) => {
                tracing::warn!("Geolocation failed: {}", e);
                self.page.alert(e.user_message());
            }
        }
    }

    /// Run the pipeline from a ZIP code typed by the user.
    ///
    /// Invalid input is rejected without any request.
    pub async fn resolve_by_zip(&self, input: &str) {
        let zip = match parse_zip(input) {
            Ok(zip) => zip,
            Err(e) => {
                tracing::debug!("Rejected ZIP input: {}", e);
                self.page.alert(e.user_message());
                self.page.focus_zip_input();
                return;
            }
        };

        match self.geocoder.lookup(zip).await {
            Ok(coord) => self.fetch_and_display(coord).await,
            Err(e) => self.report_error(&e),
        }
    }

    /// Fetch, normalize and render the forecast for `coord`, then ask for
    /// clothing recommendations.
    pub async fn fetch_and_display(&self, coord: Coordinate) {
        let record = match self.fetch_forecast(&coord).await {
            Ok(record) => record,
            Err(e) => {
                self.report_error(&e);
                return;
            }
        };

        render(self.page.as_ref(), &record);
        self.request_recommendations(&record).await;
    }

    async fn fetch_forecast(&self, coord: &Coordinate) -> Result<ForecastRecord, WeatherError> {
        let raw = self.provider.fetch(coord).await?;
        normalize(&raw)
    }

    /// Show the backend's clothing images for `record`.
    pub async fn request_recommendations(&self, record: &ForecastRecord) {
        let request = RecommendationRequest::from_record(record);

        match self.recommender.fetch(&request).await {
            Ok(response) => {
                let images: Vec<ImageElement> = response
                    .image_urls
                    .into_iter()
                    .map(ImageElement::new)
                    .collect();
                self.page.set_recommendation_images(&images);
            }
            Err(e) if e.is_degradable() => {
                tracing::warn!("Unexpected recommendation response: {}", e);
                self.page.set_recommendation_text(NO_RECOMMENDATIONS_MESSAGE);
            }
            Err(e) => self.report_error(&e),
        }
    }

    /// Central failure path for upstream and data-shape errors.
    pub fn report_error(&self, err: &WeatherError) {
        tracing::error!("Error fetching weather data: {}", err);
        self.page.set_forecast_text("");
        self.page.set_status_text(FETCH_FAILED_MESSAGE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::RecordingPage;

    fn offline_pipeline(page: Arc<RecordingPage>) -> WeatherPipeline {
        // Port 9 (discard) is never served in test environments.
        let mut config = Config::default();
        config.endpoints.geocoding_url = "http://127.0.0.1:9/us/".into();
        config.endpoints.weather_points_url = "http://127.0.0.1:9/points/".into();
        config.endpoints.recommendation_url = "http://127.0.0.1:9/getClothing".into();
        WeatherPipeline::from_config(page, &config).unwrap()
    }

    #[test]
    fn test_report_error_replaces_forecast_with_status() {
        let page = Arc::new(RecordingPage::new());
        let pipeline = offline_pipeline(page.clone());
        page.set_forecast_text("70ºF, Clear, 5 mph wind, 10% chance of rain");

        pipeline.report_error(&WeatherError::NoForecastPeriods);

        let state = page.snapshot();
        assert_eq!(state.forecast_text, "");
        assert_eq!(state.status_text, "Failed to fetch weather data.");
        assert!(state.alerts.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_zip_alerts_and_refocuses() {
        let page = Arc::new(RecordingPage::new());
        let pipeline = offline_pipeline(page.clone());

        pipeline.resolve_by_zip("1234").await;

        let state = page.snapshot();
        assert_eq!(state.alerts, vec!["Please enter a valid 5-digit ZIP code."]);
        assert_eq!(state.zip_focus_count, 1);
        assert_eq!(state.status_text, "");
    }

    #[tokio::test]
    async fn test_unsupported_geolocation_alerts() {
        let page = Arc::new(RecordingPage::new());
        let pipeline = offline_pipeline(page.clone());

        pipeline
            .resolve_by_geolocation(&runwear_weather::FixedGeolocator::default())
            .await;

        let state = page.snapshot();
        assert_eq!(state.alerts, vec!["Geolocation is not supported on this device."]);
        assert_eq!(state.forecast_text, "");
    }

    #[tokio::test]
    async fn test_invalid_coordinate_is_reported() {
        let page = Arc::new(RecordingPage::new());
        let pipeline = offline_pipeline(page.clone());

        pipeline
            .fetch_and_display(Coordinate::new(120.0, 0.0))
            .await;

        assert_eq!(page.snapshot().status_text, FETCH_FAILED_MESSAGE);
    }
}
