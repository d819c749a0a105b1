//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// Only two failures ever surface to the caller: a failed geocoding lookup
/// and a failed forecast fetch. Optional-source failures are absorbed by
/// the aggregator and never appear here.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error (empty query, bad coordinates)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Geocoding request failed; carries the upstream status or transport
    /// error text
    #[error("geocoding failed: {0}")]
    GeocodeFailed(String),

    /// Forecast fetch failed; no partial view is produced
    #[error("forecast unavailable: {0}")]
    ForecastUnavailable(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}
