//! Application layer - Use cases and orchestration
//!
//! Defines the ports to the outside world and the two services built on
//! them: resolving a place name to coordinates, and aggregating the three
//! weather fetches into one display model.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::{
    AirQualityBundle, CurrentSnapshot, DailySeries, ForecastBundle, GeocodingPort, HourlySeries,
    MarineBundle, Series, WeatherDataPort,
};
pub use services::{AggregatorService, Resolution, ResolverService, WeatherView};
