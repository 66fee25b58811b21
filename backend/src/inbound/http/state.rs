//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on domain ports and stay testable without the real store.

use std::sync::Arc;

use crate::domain::ports::RegionRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Region storage.
    pub regions: Arc<dyn RegionRepository>,
}

impl HttpState {
    /// Bundle the ports used by the handlers.
    #[must_use]
    pub const fn new(regions: Arc<dyn RegionRepository>) -> Self {
        Self { regions }
    }
}
