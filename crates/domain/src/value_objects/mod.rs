//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod weather_code;

pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use weather_code::{Glyph, WeatherCode};
