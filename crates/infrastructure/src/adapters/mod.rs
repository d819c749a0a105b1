//! Port adapters over the Open-Meteo clients

mod geocoding_adapter;
mod weather_adapter;

pub use geocoding_adapter::GeocodingAdapter;
pub use weather_adapter::WeatherDataAdapter;
