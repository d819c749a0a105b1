//! Query resolution service
//!
//! Turns free-text input into coordinates via the geocoding port, or into a
//! candidate list when the name is ambiguous.

use std::fmt;
use std::sync::Arc;

use domain::{DomainError, Place};
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::GeocodingPort;

/// Maximum geocoding candidates requested per query
const CANDIDATE_LIMIT: u8 = 6;

/// Outcome of resolving a free-text query
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Exactly one candidate matched
    Resolved(Place),
    /// Several candidates matched, in upstream relevance order; selection
    /// is left to the caller
    Ambiguous(Vec<Place>),
    /// The search succeeded but matched nothing
    NoMatch,
}

/// Resolves place names through the geocoding port
pub struct ResolverService {
    geocoding: Arc<dyn GeocodingPort>,
}

impl fmt::Debug for ResolverService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverService").finish_non_exhaustive()
    }
}

impl ResolverService {
    /// Create a resolver over a geocoding port
    #[must_use]
    pub fn new(geocoding: Arc<dyn GeocodingPort>) -> Self {
        Self { geocoding }
    }

    /// Resolve free-text input into a place or a candidate list
    ///
    /// Input that is empty after trimming fails locally with
    /// `DomainError::EmptyQuery`; the geocoding port is never called.
    #[instrument(skip(self))]
    pub async fn resolve(&self, query: &str) -> Result<Resolution, ApplicationError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(DomainError::EmptyQuery.into());
        }

        let mut candidates = self.geocoding.search(query, CANDIDATE_LIMIT).await?;
        debug!(count = candidates.len(), "geocoding returned candidates");

        Ok(match candidates.len() {
            0 => Resolution::NoMatch,
            1 => Resolution::Resolved(candidates.remove(0)),
            _ => Resolution::Ambiguous(candidates),
        })
    }
}
