//! Region server library.
//!
//! Stores named polygonal regions in memory and answers which regions
//! contain a given point. The crate follows a hexagonal layout:
//!
//! - [`domain`] holds coordinates, polygons, regions and the lookup
//!   use-case, with the [`domain::ports::RegionRepository`] port.
//! - [`outbound`] provides the in-memory store behind that port.
//! - [`inbound`] exposes the HTTP adapter.
//! - [`middleware`] carries request tracing.
//! - [`doc`] builds the OpenAPI document.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
