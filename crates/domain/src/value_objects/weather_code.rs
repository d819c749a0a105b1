//! WMO weather interpretation codes
//!
//! Open-Meteo reports conditions as WMO codes. Two fixed lookups are
//! derived from a code: a human-readable phrase (per code) and a pictogram
//! class (per code range). Both are pure data; unrecognized codes fall back
//! to "Unknown" and the generic cloud glyph respectively.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A WMO weather code as reported by Open-Meteo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherCode(pub u8);

impl WeatherCode {
    /// Human-readable phrase for this code
    ///
    /// Exactly the codes 0, 1-3, 45, 48, 51, 53, 55, 61, 63, 65, 71, 73,
    /// 75, 80-82, 95, 96 and 99 have a phrase; anything else is "Unknown".
    #[must_use]
    pub const fn phrase(self) -> &'static str {
        match self.0 {
            0 => "Clear sky",
            1 => "Mainly clear",
            2 => "Partly cloudy",
            3 => "Overcast",
            45 => "Fog",
            48 => "Depositing rime fog",
            51 => "Light drizzle",
            53 => "Moderate drizzle",
            55 => "Dense drizzle",
            61 => "Slight rain",
            63 => "Moderate rain",
            65 => "Heavy rain",
            71 => "Light snow",
            73 => "Moderate snow",
            75 => "Heavy snow",
            80 => "Slight rain showers",
            81 => "Moderate rain showers",
            82 => "Violent rain showers",
            95 => "Thunderstorm",
            96 => "Thunderstorm with slight hail",
            99 => "Thunderstorm with heavy hail",
            _ => "Unknown",
        }
    }

    /// Pictogram class for this code
    ///
    /// Coarser than the phrase table: 85/86 have no phrase of their own but
    /// still classify as snow.
    #[must_use]
    pub const fn glyph(self) -> Glyph {
        match self.0 {
            0 => Glyph::Clear,
            1..=3 => Glyph::PartlyCloudy,
            45 | 48 => Glyph::Fog,
            51 | 53 | 55 | 61 | 63 | 65 | 80..=82 => Glyph::Rain,
            71 | 73 | 75 | 85 | 86 => Glyph::Snow,
            95 | 96 | 99 => Glyph::Thunderstorm,
            _ => Glyph::Cloudy,
        }
    }
}

impl fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.phrase())
    }
}

/// The six pictogram classes plus the generic-cloud default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Glyph {
    Clear,
    PartlyCloudy,
    Fog,
    Rain,
    Snow,
    Thunderstorm,
    Cloudy,
}

impl Glyph {
    /// Emoji pictogram for this class
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Clear => "☀️",
            Self::PartlyCloudy => "⛅",
            Self::Fog => "🌫️",
            Self::Rain => "🌧️",
            Self::Snow => "❄️",
            Self::Thunderstorm => "⛈️",
            Self::Cloudy => "🌤️",
        }
    }
}
