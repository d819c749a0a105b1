//! Geocoding service port

use async_trait::async_trait;
use domain::Place;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for name-to-coordinates resolution
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Search for places matching a free-text name
    ///
    /// Returns up to `count` candidates in the upstream's relevance order.
    /// An empty vector is a valid outcome (nothing matched), not an error.
    async fn search(&self, query: &str, count: u8) -> Result<Vec<Place>, ApplicationError>;
}
