//! A resolved geographic place
//!
//! Produced by geocoding and consumed by one aggregation pass; places are
//! never stored or mutated.

use crate::value_objects::GeoLocation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named place with coordinates, as returned by the geocoding service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    name: String,
    country: Option<String>,
    admin1: Option<String>,
    location: GeoLocation,
}

impl Place {
    /// Create a place from geocoding metadata
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        country: Option<String>,
        admin1: Option<String>,
        location: GeoLocation,
    ) -> Self {
        Self {
            name: name.into(),
            country,
            admin1,
            location,
        }
    }

    /// The place name, e.g. "Berlin"
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Country name, when the geocoder supplied one
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// First-level administrative region, when supplied
    #[must_use]
    pub fn admin1(&self) -> Option<&str> {
        self.admin1.as_deref()
    }

    /// Coordinates of the place
    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        self.location
    }

    /// Disambiguation label: "Name, Admin1 (Country)" with absent parts
    /// elided. Used when listing candidates.
    #[must_use]
    pub fn label(&self) -> String {
        let mut label = self.name.clone();
        if let Some(admin1) = &self.admin1 {
            label.push_str(", ");
            label.push_str(admin1);
        }
        if let Some(country) = &self.country {
            label.push_str(" (");
            label.push_str(country);
            label.push(')');
        }
        label
    }

    /// Header line: "Name, Country" (country elided when absent)
    #[must_use]
    pub fn headline(&self) -> String {
        match &self.country {
            Some(country) => format!("{}, {country}", self.name),
            None => self.name.clone(),
        }
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
