//! Open-Meteo integration
//!
//! HTTP clients for the four Open-Meteo endpoints this project reads:
//! forecast, air quality, marine, and geocoding (<https://open-meteo.com>).
//! All are unauthenticated JSON GET APIs; a non-success status is the only
//! wire-level error signal.

pub mod client;
mod models;

pub use client::{OpenMeteoClient, OpenMeteoConfig, OpenMeteoError};
pub use models::{
    AirQualityHourly, AirQualityResponse, CurrentWeatherData, DailyData, ForecastResponse,
    GeocodingResponse, GeocodingResult, HourlyData, MarineHourly, MarineResponse,
};
