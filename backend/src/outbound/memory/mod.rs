//! Memory-backed adapters. Nothing here survives a restart.

mod region_store;

pub use region_store::RegionStore;
