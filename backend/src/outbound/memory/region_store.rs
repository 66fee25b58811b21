//! In-memory region store guarded by a reader/writer lock.
//!
//! Regions are keyed by their title-cased name. Contents are lost when the
//! process exits.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::ports::{RegionRepository, RegionRepositoryError};
use crate::domain::{Region, title_case};

/// Thread-safe keyed collection of regions.
///
/// Reads share the lock; [`RegionStore::create`] and [`RegionStore::delete`]
/// take it exclusively. No caller code runs while the lock is held.
///
/// # Examples
/// ```
/// use region_server::domain::{Coordinate, Region};
/// use region_server::outbound::memory::RegionStore;
///
/// let store = RegionStore::new();
/// let region = Region::new(
///     "new mexico",
///     [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]]
///         .map(Coordinate::from)
///         .to_vec(),
/// )
/// .expect("valid region");
/// let created = store.create(region).expect("first insert succeeds");
/// assert_eq!(created.name(), "New Mexico");
/// assert!(store.get_by_name("NEW MEXICO").is_ok());
/// ```
#[derive(Debug, Default)]
pub struct RegionStore {
    regions: RwLock<HashMap<String, Region>>,
}

impl RegionStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every stored region, in no particular order.
    #[must_use]
    pub fn get_all(&self) -> Vec<Region> {
        self.read().values().cloned().collect()
    }

    /// Look up a region by name, ignoring case.
    ///
    /// # Errors
    /// Returns [`RegionRepositoryError::NotFound`] carrying `name` exactly as
    /// given when nothing matches.
    pub fn get_by_name(&self, name: &str) -> Result<Region, RegionRepositoryError> {
        self.read()
            .get(&title_case(name))
            .cloned()
            .ok_or_else(|| RegionRepositoryError::not_found(name))
    }

    /// Insert `region` under its title-cased name.
    ///
    /// The region is rebuilt from the normalised name and its border so that
    /// every stored entry has passed validation.
    ///
    /// # Errors
    /// Returns [`RegionRepositoryError::Invalid`] when the rebuilt region
    /// fails validation and [`RegionRepositoryError::Duplicate`] when the
    /// normalised name is taken. The store is unchanged on error.
    pub fn create(&self, region: Region) -> Result<Region, RegionRepositoryError> {
        let name = title_case(region.name());
        let mut regions = self.write();
        let created = region.renamed(name)?;
        if regions.contains_key(created.name()) {
            return Err(RegionRepositoryError::duplicate(created.name()));
        }
        regions.insert(created.name().to_owned(), created.clone());
        Ok(created)
    }

    /// Remove the region matching `name`, ignoring case, and report whether
    /// one was stored. Absent names are a no-op.
    #[expect(
        clippy::must_use_candidate,
        reason = "callers may delete without caring whether the name existed"
    )]
    pub fn delete(&self, name: &str) -> bool {
        self.write().remove(&title_case(name)).is_some()
    }

    /// Number of stored regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the store holds no regions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Writers never leave the map half-updated, so a poisoned lock still
    // guards a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Region>> {
        self.regions.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Region>> {
        self.regions.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl RegionRepository for RegionStore {
    async fn list_regions(&self) -> Vec<Region> {
        self.get_all()
    }

    async fn get_region(&self, name: &str) -> Result<Region, RegionRepositoryError> {
        self.get_by_name(name)
    }

    async fn create_region(&self, region: Region) -> Result<Region, RegionRepositoryError> {
        self.create(region)
    }

    async fn delete_region(&self, name: &str) -> bool {
        self.delete(name)
    }
}

#[cfg(test)]
mod tests;
