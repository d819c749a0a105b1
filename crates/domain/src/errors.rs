//! Domain-level errors

use crate::value_objects::InvalidCoordinates;
use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Query text was empty after trimming
    #[error("search query is empty")]
    EmptyQuery,

    /// Coordinates outside the valid latitude/longitude ranges
    #[error(transparent)]
    Coordinates(#[from] InvalidCoordinates),
}
