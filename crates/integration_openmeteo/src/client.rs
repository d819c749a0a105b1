//! Open-Meteo HTTP client
//!
//! One reqwest client covers all four endpoints; each lives on its own
//! host, so the config carries one base URL per endpoint (overridable for
//! tests).

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{AirQualityResponse, ForecastResponse, GeocodingResponse, MarineResponse};

/// Hourly fields requested from the forecast endpoint
const FORECAST_HOURLY_FIELDS: &str = "temperature_2m,relative_humidity_2m,pressure_msl,\
     visibility,uv_index,precipitation,weathercode,wind_speed_10m,wind_direction_10m,\
     soil_moisture_0_to_1cm";

/// Daily fields requested from the forecast endpoint
const FORECAST_DAILY_FIELDS: &str = "sunrise,sunset,uv_index_max,weathercode";

/// Hourly fields requested from the air-quality endpoint
const AIR_QUALITY_HOURLY_FIELDS: &str = "pm2_5,pm10,nitrogen_dioxide,ozone";

/// Client errors
#[derive(Debug, Error)]
pub enum OpenMeteoError {
    /// The HTTP client could not be built or the request never reached the
    /// service
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The service answered with a non-success status
    #[error("request failed: HTTP {status}")]
    RequestFailed { status: u16 },

    /// The response body was not the expected JSON
    #[error("parse error: {0}")]
    ParseError(String),

    /// Coordinates outside the valid ranges
    #[error("invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,
}

/// Endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenMeteoConfig {
    /// Forecast API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_forecast_base_url")]
    pub forecast_base_url: String,

    /// Air-quality API base URL
    /// (default: <https://air-quality-api.open-meteo.com/v1>)
    #[serde(default = "default_air_quality_base_url")]
    pub air_quality_base_url: String,

    /// Marine API base URL (default: <https://marine-api.open-meteo.com/v1>)
    #[serde(default = "default_marine_base_url")]
    pub marine_base_url: String,

    /// Geocoding API base URL
    /// (default: <https://geocoding-api.open-meteo.com/v1>)
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_forecast_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_air_quality_base_url() -> String {
    "https://air-quality-api.open-meteo.com/v1".to_string()
}

fn default_marine_base_url() -> String {
    "https://marine-api.open-meteo.com/v1".to_string()
}

fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for OpenMeteoConfig {
    fn default() -> Self {
        Self {
            forecast_base_url: default_forecast_base_url(),
            air_quality_base_url: default_air_quality_base_url(),
            marine_base_url: default_marine_base_url(),
            geocoding_base_url: default_geocoding_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Open-Meteo HTTP client
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    config: OpenMeteoConfig,
}

impl OpenMeteoClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: OpenMeteoConfig) -> Result<Self, OpenMeteoError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OpenMeteoError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, OpenMeteoError> {
        Self::new(OpenMeteoConfig::default())
    }

    /// Validate coordinates before dispatching a request
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), OpenMeteoError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(OpenMeteoError::InvalidCoordinates);
        }
        Ok(())
    }

    fn forecast_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/forecast?latitude={latitude}&longitude={longitude}&hourly={FORECAST_HOURLY_FIELDS}\
             &daily={FORECAST_DAILY_FIELDS}&current_weather=true&timezone=auto",
            self.config.forecast_base_url
        )
    }

    fn air_quality_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/air-quality?latitude={latitude}&longitude={longitude}\
             &hourly={AIR_QUALITY_HOURLY_FIELDS}&timezone=auto",
            self.config.air_quality_base_url
        )
    }

    fn marine_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/marine?latitude={latitude}&longitude={longitude}&hourly=wave_height&timezone=auto",
            self.config.marine_base_url
        )
    }

    /// Issue a GET and decode the JSON body
    ///
    /// Non-success status is the only wire-level error; no error body is
    /// parsed.
    async fn get_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, OpenMeteoError> {
        let response = request
            .send()
            .await
            .map_err(|e| OpenMeteoError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(OpenMeteoError::RequestFailed {
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| OpenMeteoError::ParseError(e.to_string()))
    }

    /// Fetch the forecast for a coordinate
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    pub async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastResponse, OpenMeteoError> {
        Self::validate_coordinates(latitude, longitude)?;
        let url = self.forecast_url(latitude, longitude);
        debug!(url = %url, "fetching forecast");
        self.get_json(self.client.get(&url)).await
    }

    /// Fetch air-quality data for a coordinate
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    pub async fn air_quality(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<AirQualityResponse, OpenMeteoError> {
        Self::validate_coordinates(latitude, longitude)?;
        let url = self.air_quality_url(latitude, longitude);
        debug!(url = %url, "fetching air quality");
        self.get_json(self.client.get(&url)).await
    }

    /// Fetch marine data for a coordinate
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    pub async fn marine(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<MarineResponse, OpenMeteoError> {
        Self::validate_coordinates(latitude, longitude)?;
        let url = self.marine_url(latitude, longitude);
        debug!(url = %url, "fetching marine data");
        self.get_json(self.client.get(&url)).await
    }

    /// Search for places by name
    ///
    /// The name goes through reqwest's query encoding, so free text with
    /// spaces and diacritics is safe.
    #[instrument(skip(self))]
    pub async fn search_places(
        &self,
        name: &str,
        count: u8,
    ) -> Result<GeocodingResponse, OpenMeteoError> {
        let url = format!("{}/search", self.config.geocoding_base_url);
        debug!(url = %url, name, count, "searching places");
        let request = self.client.get(&url).query(&[
            ("name", name),
            ("count", &count.to_string()),
            ("language", "en"),
        ]);
        self.get_json(request).await
    }
}
