//! Display model produced by aggregation

use serde::{Deserialize, Serialize};

/// Flat set of display-ready strings
///
/// Every field always holds a printable string; a fixed placeholder stands
/// in whenever the underlying value is unavailable. This is the only thing
/// handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherView {
    /// Headline temperature, e.g. "18.4 °C"
    pub temperature: String,
    /// Headline wind line, e.g. "Windspeed: 12.1 km/h"
    pub windspeed: String,
    /// Headline humidity line, e.g. "Humidity : 60%"
    pub humidity: String,
    /// Weather phrase, e.g. "Overcast"
    pub condition: String,
    /// Pictogram for the current conditions
    pub glyph: String,
    /// Date of the current observation, e.g. "2024-05-01"
    pub date: String,
    /// PM2.5 reading, e.g. "PM2.5: 12.5"
    pub air_quality: String,
    /// Topsoil moisture reading
    pub soil_moisture: String,
    /// Wave height, e.g. "0.4 m"
    pub wave_height: String,
    /// UV index
    pub uv_index: String,
    /// Wind tile, e.g. "12.1 km/h"
    pub wind: String,
    /// Surface pressure, e.g. "1013.2 hPa"
    pub pressure: String,
    /// Visibility, e.g. "24140 m"
    pub visibility: String,
}

impl WeatherView {
    /// The nine tile strings in their fixed render order
    #[must_use]
    pub fn tiles(&self) -> [(&'static str, &str); 9] {
        [
            ("date", &self.date),
            ("air quality", &self.air_quality),
            ("soil moisture", &self.soil_moisture),
            ("wave height", &self.wave_height),
            ("uv index", &self.uv_index),
            ("wind", &self.wind),
            ("pressure", &self.pressure),
            ("visibility", &self.visibility),
            ("conditions", &self.condition),
        ]
    }
}
