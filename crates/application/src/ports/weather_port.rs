//! Weather data port
//!
//! One port covers the three upstream fetches: forecast (required by the
//! aggregator), air quality and marine (optional). The bundle types carry
//! the raw series shapes so the aggregator can do its own index resolution.

use async_trait::async_trait;
use domain::GeoLocation;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// An hourly value series aligned on a shared `time` vector
///
/// The whole series may be absent (the upstream omitted the field) and
/// individual entries may be null, so reads are total: out-of-range or
/// missing values come back as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series<T = f64>(pub Option<Vec<Option<T>>>);

impl<T: Copy> Series<T> {
    /// Value at `index`, if the series exists and holds one there
    #[must_use]
    pub fn at(&self, index: usize) -> Option<T> {
        self.0.as_ref()?.get(index).copied().flatten()
    }
}

impl<T> Series<T> {
    /// Build a series where every entry is present
    #[must_use]
    pub fn from_values(values: Vec<T>) -> Self {
        Self(Some(values.into_iter().map(Some).collect()))
    }

    /// A series the upstream did not include
    #[must_use]
    pub const fn absent() -> Self {
        Self(None)
    }
}

/// The upstream's explicit current-conditions snapshot
///
/// Each field is independently optional; consumers fall back per field to
/// index 0 of the matching hourly series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentSnapshot {
    pub temperature: Option<f64>,
    pub wind_speed: Option<f64>,
    pub weather_code: Option<u8>,
    pub time: Option<String>,
}

/// Hourly forecast series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlySeries {
    pub time: Vec<String>,
    pub temperature: Series,
    pub relative_humidity: Series,
    pub pressure: Series,
    pub visibility: Series,
    pub uv_index: Series,
    pub wind_speed: Series,
    pub soil_moisture: Series,
    pub weather_code: Series<u8>,
}

/// Daily forecast series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailySeries {
    pub time: Vec<String>,
    pub uv_index_max: Series,
}

/// Parsed forecast response; the only required bundle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastBundle {
    pub current: Option<CurrentSnapshot>,
    pub hourly: HourlySeries,
    pub daily: DailySeries,
}

/// Parsed air-quality response (optional source)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AirQualityBundle {
    pub time: Vec<String>,
    pub pm2_5: Series,
}

/// Parsed marine response (optional source)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarineBundle {
    pub time: Vec<String>,
    pub wave_height: Series,
}

/// Port for the three weather data fetches
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherDataPort: Send + Sync {
    /// Fetch the forecast bundle; failure aborts aggregation
    async fn forecast(&self, location: &GeoLocation) -> Result<ForecastBundle, ApplicationError>;

    /// Fetch the air-quality bundle; failure degrades to placeholders
    async fn air_quality(
        &self,
        location: &GeoLocation,
    ) -> Result<AirQualityBundle, ApplicationError>;

    /// Fetch the marine bundle; failure degrades to placeholders
    async fn marine(&self, location: &GeoLocation) -> Result<MarineBundle, ApplicationError>;
}
