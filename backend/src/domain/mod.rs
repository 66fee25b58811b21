//! Domain primitives, aggregates and use-cases.
//!
//! Purpose: model polygon-bounded regions and answer which of them contain
//! a point. Types here are transport agnostic; adapters in `inbound` and
//! `outbound` translate to and from HTTP and storage.
//!
//! Public surface:
//! - Coordinate, Polygon, Region: validated geometry and named regions.
//! - title_case: the name normalisation used as the store key.
//! - regions_containing: the point lookup use-case.
//! - Error, ErrorCode: the error payload returned to clients.
//! - TraceId: request correlation identifier.

pub mod error;
mod geo;
mod locate;
pub mod ports;
mod region;
mod region_name;
mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::geo::{Coordinate, CoordinateError, MIN_RING_LEN, Polygon, PolygonError};
pub use self::locate::regions_containing;
pub use self::region::{MIN_NAME_LEN, Region, RegionValidationError};
pub use self::region_name::title_case;
pub use self::trace_id::TraceId;
