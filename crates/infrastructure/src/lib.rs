//! Infrastructure layer
//!
//! Adapters that implement the application ports over the Open-Meteo HTTP
//! clients. The application layer only sees the port traits; everything
//! endpoint-shaped stays here.

pub mod adapters;

pub use adapters::{GeocodingAdapter, WeatherDataAdapter};
