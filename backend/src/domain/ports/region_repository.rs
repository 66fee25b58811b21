//! Port for region storage adapters and their errors.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Region, RegionValidationError};

/// Failures reported by region repositories.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegionRepositoryError {
    /// No region is stored under the requested name.
    #[error("no state found with name: {name}")]
    NotFound {
        /// Name as requested by the caller, before normalisation.
        name: String,
    },
    /// A region with the same normalised name already exists.
    #[error("duplicate state: {name}")]
    Duplicate {
        /// Normalised name of the clashing region.
        name: String,
    },
    /// The region failed validation on its way into the store.
    #[error(transparent)]
    Invalid(#[from] RegionValidationError),
}

impl RegionRepositoryError {
    /// Construct a [`RegionRepositoryError::NotFound`].
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Construct a [`RegionRepositoryError::Duplicate`].
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::Duplicate { name: name.into() }
    }
}

/// Keyed collection of regions with case-insensitive names.
///
/// Implementations must be safe to call from concurrent request handlers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegionRepository: Send + Sync {
    /// Snapshot of every stored region, in no particular order.
    async fn list_regions(&self) -> Vec<Region>;

    /// Fetch the region whose normalised name matches `name`.
    async fn get_region(&self, name: &str) -> Result<Region, RegionRepositoryError>;

    /// Normalise, re-validate and insert `region`, returning the stored copy.
    async fn create_region(&self, region: Region) -> Result<Region, RegionRepositoryError>;

    /// Remove the region matching `name`, returning whether one existed.
    /// Absent names are not an error.
    async fn delete_region(&self, name: &str) -> bool;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::PolygonError;
    use rstest::rstest;

    #[rstest]
    #[case(RegionRepositoryError::not_found("Atlantis"), "no state found with name: Atlantis")]
    #[case(RegionRepositoryError::duplicate("Valid"), "duplicate state: Valid")]
    #[case(
        RegionRepositoryError::from(RegionValidationError::Border(PolygonError::RingUnclosed)),
        "polygon ring must be closed, first and last positions must be equal"
    )]
    fn messages_match_callers_expectations(
        #[case] error: RegionRepositoryError,
        #[case] expected: &str,
    ) {
        assert_eq!(error.to_string(), expected);
    }
}
