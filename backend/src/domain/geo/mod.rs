//! Geometry primitives: coordinates and single-ring polygons.

mod coordinate;
mod polygon;
mod sphere;

pub use coordinate::{Coordinate, CoordinateError};
pub use polygon::{MIN_RING_LEN, Polygon, PolygonError};
