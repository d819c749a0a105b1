//! Geocoding adapter - implements GeocodingPort using integration_openmeteo

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::{GeoLocation, Place};
use integration_openmeteo::{GeocodingResult, OpenMeteoClient, OpenMeteoConfig, OpenMeteoError};
use tracing::{debug, instrument};

/// Adapter for name-to-coordinates resolution via the Open-Meteo geocoder
pub struct GeocodingAdapter {
    client: OpenMeteoClient,
}

impl std::fmt::Debug for GeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAdapter")
            .field("client", &"OpenMeteoClient")
            .finish()
    }
}

impl GeocodingAdapter {
    /// Create a new adapter with default endpoints
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        let client = OpenMeteoClient::with_defaults().map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Create with custom endpoint configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: OpenMeteoConfig) -> Result<Self, ApplicationError> {
        let client = OpenMeteoClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Wrap an existing client; lets one client serve several adapters
    #[must_use]
    pub const fn from_client(client: OpenMeteoClient) -> Self {
        Self { client }
    }

    /// Map an integration error to a geocoding failure
    ///
    /// Every wire-level problem surfaces as `GeocodeFailed`; the message
    /// keeps the status or transport detail for the caller to display.
    fn map_error(err: OpenMeteoError) -> ApplicationError {
        match err {
            OpenMeteoError::RequestFailed { status } => {
                ApplicationError::GeocodeFailed(format!("HTTP {status}"))
            },
            OpenMeteoError::ConnectionFailed(detail) | OpenMeteoError::ParseError(detail) => {
                ApplicationError::GeocodeFailed(detail)
            },
            OpenMeteoError::InvalidCoordinates => {
                ApplicationError::GeocodeFailed(err.to_string())
            },
        }
    }

    /// Convert a geocoding candidate to a domain place
    ///
    /// Coordinates come from the upstream service, which only returns real
    /// locations, so no revalidation happens here.
    fn map_place(result: GeocodingResult) -> Place {
        Place::new(
            result.name,
            result.country,
            result.admin1,
            GeoLocation::new_unchecked(result.latitude, result.longitude),
        )
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self))]
    async fn search(&self, query: &str, count: u8) -> Result<Vec<Place>, ApplicationError> {
        let response = self
            .client
            .search_places(query, count)
            .await
            .map_err(Self::map_error)?;

        let places: Vec<Place> = response
            .results
            .unwrap_or_default()
            .into_iter()
            .map(Self::map_place)
            .collect();

        debug!(candidates = places.len(), "geocoding search completed");
        Ok(places)
    }
}
