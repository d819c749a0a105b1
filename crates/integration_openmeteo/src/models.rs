//! Raw Open-Meteo response models
//!
//! Serde mirrors of the JSON the four endpoints return. Hourly arrays can
//! contain nulls and whole blocks can be missing, so everything below the
//! top level is optional.

use serde::Deserialize;

/// Forecast endpoint response
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub current_weather: Option<CurrentWeatherData>,
    pub hourly: Option<HourlyData>,
    pub daily: Option<DailyData>,
}

/// The `current_weather=true` snapshot block
///
/// The legacy snapshot shape: flat keys, no `_2m` suffixes.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeatherData {
    pub temperature: Option<f64>,
    pub windspeed: Option<f64>,
    pub weathercode: Option<u8>,
    pub time: Option<String>,
}

/// Hourly block of the forecast response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HourlyData {
    #[serde(default)]
    pub time: Vec<String>,
    pub temperature_2m: Option<Vec<Option<f64>>>,
    pub relative_humidity_2m: Option<Vec<Option<f64>>>,
    pub pressure_msl: Option<Vec<Option<f64>>>,
    pub visibility: Option<Vec<Option<f64>>>,
    pub uv_index: Option<Vec<Option<f64>>>,
    pub wind_speed_10m: Option<Vec<Option<f64>>>,
    pub soil_moisture_0_to_1cm: Option<Vec<Option<f64>>>,
    pub weathercode: Option<Vec<Option<u8>>>,
}

/// Daily block of the forecast response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailyData {
    #[serde(default)]
    pub time: Vec<String>,
    pub uv_index_max: Option<Vec<Option<f64>>>,
}

/// Air-quality endpoint response
#[derive(Debug, Clone, Deserialize)]
pub struct AirQualityResponse {
    pub hourly: Option<AirQualityHourly>,
}

/// Hourly block of the air-quality response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AirQualityHourly {
    #[serde(default)]
    pub time: Vec<String>,
    pub pm2_5: Option<Vec<Option<f64>>>,
    pub pm10: Option<Vec<Option<f64>>>,
    pub nitrogen_dioxide: Option<Vec<Option<f64>>>,
    pub ozone: Option<Vec<Option<f64>>>,
}

/// Marine endpoint response
#[derive(Debug, Clone, Deserialize)]
pub struct MarineResponse {
    pub hourly: Option<MarineHourly>,
}

/// Hourly block of the marine response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarineHourly {
    #[serde(default)]
    pub time: Vec<String>,
    pub wave_height: Option<Vec<Option<f64>>>,
}

/// Geocoding endpoint response
///
/// A search with no matches omits `results` entirely.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResponse {
    pub results: Option<Vec<GeocodingResult>>,
}

/// One geocoding candidate
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
    pub admin1: Option<String>,
}
