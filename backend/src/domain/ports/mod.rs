//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven adapters.
//! Each trait exposes strongly typed errors so adapters map their failures
//! into predictable variants.

mod region_repository;

#[cfg(test)]
pub use region_repository::MockRegionRepository;
pub use region_repository::{RegionRepository, RegionRepositoryError};
