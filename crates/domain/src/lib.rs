//! Domain layer for Meteotile
//!
//! Core value objects, entities, and domain errors for place-based weather
//! lookup. This layer has no I/O and no external service knowledge.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::Place;
pub use errors::DomainError;
pub use value_objects::{GeoLocation, Glyph, InvalidCoordinates, WeatherCode};
