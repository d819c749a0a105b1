//! Domain entities

mod place;

pub use place::Place;
