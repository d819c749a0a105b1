//! Port definitions for the application layer
//!
//! Ports are the interfaces through which the application reaches external
//! systems. Adapters in the infrastructure layer implement them.

mod geocoding_port;
mod weather_port;

pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use weather_port::{
    AirQualityBundle, CurrentSnapshot, DailySeries, ForecastBundle, HourlySeries, MarineBundle,
    Series, WeatherDataPort,
};
#[cfg(test)]
pub use weather_port::MockWeatherDataPort;
