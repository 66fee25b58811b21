//! Single-ring polygon with orientation repair and ray-cast containment.
//!
//! Rings follow RFC 7946 §3.1.6: at least four positions, first equal to
//! last, exterior ring wound clockwise under the right-hand rule as judged by
//! the spherical turning angle.
#![expect(
    clippy::float_arithmetic,
    reason = "ray casting compares slopes of edge segments"
)]

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Coordinate;
use super::sphere::turning_angle;

/// Minimum number of positions in a closed linear ring.
pub const MIN_RING_LEN: usize = 4;

/// Ring defects reported by [`Polygon::new`] and [`Polygon::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PolygonError {
    /// Fewer than [`MIN_RING_LEN`] positions.
    #[error("polygon ring too short, must contain at least 4 positions")]
    RingTooShort {
        /// Number of positions supplied.
        len: usize,
    },
    /// First and last positions differ.
    #[error("polygon ring must be closed, first and last positions must be equal")]
    RingUnclosed,
    /// Ring winds counter-clockwise. Only [`Polygon::validate`] reports this.
    #[error("polygon exterior ring must be clockwise (angle is {angle:.6})")]
    CounterClockwise {
        /// Turning angle of the offending ring in radians.
        angle: f64,
    },
}

impl PolygonError {
    /// Return `true` for structural defects (length or closure).
    #[must_use]
    pub const fn is_shape_error(&self) -> bool {
        matches!(self, Self::RingTooShort { .. } | Self::RingUnclosed)
    }
}

/// Closed linear ring of coordinates, wound clockwise.
///
/// Instances built through [`Polygon::new`] (including deserialisation) are
/// always clockwise: counter-clockwise input is reversed rather than
/// rejected.
///
/// # Examples
/// ```
/// use region_server::domain::{Coordinate, Polygon};
///
/// let square = Polygon::new(
///     [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]]
///         .map(Coordinate::from)
///         .to_vec(),
/// )?;
/// assert!(square.contains(Coordinate::lat_lng(5.0, 5.0)));
/// assert!(!square.contains(Coordinate::lat_lng(5.0, -10.0)));
/// # Ok::<(), region_server::domain::PolygonError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Coordinate>", into = "Vec<Coordinate>")]
pub struct Polygon(Vec<Coordinate>);

impl Polygon {
    /// Build a polygon, reversing counter-clockwise rings.
    ///
    /// # Errors
    /// Returns [`PolygonError::RingTooShort`] or [`PolygonError::RingUnclosed`]
    /// when the ring is structurally invalid. Orientation never fails here.
    pub fn new(coordinates: Vec<Coordinate>) -> Result<Self, PolygonError> {
        check_ring_shape(&coordinates)?;
        let mut vertices = coordinates;
        if turning_angle(&vertices) > 0.0 {
            vertices.reverse();
        }
        Ok(Self(vertices))
    }

    /// Check a raw ring without repairing it.
    ///
    /// Use this when a counter-clockwise ring should be surfaced to the
    /// caller instead of silently reversed.
    ///
    /// # Errors
    /// Returns the first defect found: length, then closure, then
    /// orientation.
    pub fn validate_ring(coordinates: &[Coordinate]) -> Result<(), PolygonError> {
        check_ring_shape(coordinates)?;
        let angle = turning_angle(coordinates);
        if angle > 0.0 {
            return Err(PolygonError::CounterClockwise { angle });
        }
        Ok(())
    }

    /// Re-check this polygon against every ring rule.
    ///
    /// # Errors
    /// See [`Polygon::validate_ring`].
    pub fn validate(&self) -> Result<(), PolygonError> {
        Self::validate_ring(&self.0)
    }

    /// Ray-casting point-in-polygon test.
    ///
    /// A ray is cast from `point` towards increasing longitude and the
    /// crossings with each edge are counted; an odd count means inside.
    #[must_use]
    pub fn contains(&self, point: Coordinate) -> bool {
        self.edges().fold(false, |inside, (start, end)| {
            inside ^ ray_crosses_edge(point, start, end)
        })
    }

    /// Borrow the ring's coordinates, closing position included.
    #[must_use]
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.0
    }

    /// Number of positions in the ring, closing position included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`: a constructed ring holds at least [`MIN_RING_LEN`]
    /// positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn edges(&self) -> impl Iterator<Item = (Coordinate, Coordinate)> + '_ {
        self.0
            .windows(2)
            .filter_map(|pair| match pair {
                [start, end] => Some((*start, *end)),
                _ => None,
            })
    }
}

fn check_ring_shape(coordinates: &[Coordinate]) -> Result<(), PolygonError> {
    if coordinates.len() < MIN_RING_LEN {
        return Err(PolygonError::RingTooShort {
            len: coordinates.len(),
        });
    }
    if coordinates.first() != coordinates.last() {
        return Err(PolygonError::RingUnclosed);
    }
    Ok(())
}

/// Whether the eastward ray from `point` crosses the edge `start -> end`.
///
/// A point level with either endpoint is nudged north by one ulp so that a
/// ray through a vertex is counted exactly once across its two edges.
fn ray_crosses_edge(point: Coordinate, start: Coordinate, end: Coordinate) -> bool {
    let (low, high) = if start.lat() < end.lat() {
        (start, end)
    } else {
        (end, start)
    };

    let mut lat = point.lat();
    while lat == low.lat() || lat == high.lat() {
        lat = lat.next_up();
    }
    let point = point.with_lat(lat);

    if point.lat() < low.lat() || point.lat() > high.lat() {
        return false;
    }

    let (west, east) = if low.lng() > high.lng() {
        (high.lng(), low.lng())
    } else {
        (low.lng(), high.lng())
    };
    if point.lng() > east {
        return false;
    }
    if point.lng() < west {
        return true;
    }

    let point_slope = (point.lat() - low.lat()) / (point.lng() - low.lng());
    let edge_slope = (high.lat() - low.lat()) / (high.lng() - low.lng());
    point_slope >= edge_slope
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, coordinate) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{coordinate}")?;
        }
        f.write_str("}")
    }
}

impl TryFrom<Vec<Coordinate>> for Polygon {
    type Error = PolygonError;

    fn try_from(value: Vec<Coordinate>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Polygon> for Vec<Coordinate> {
    fn from(value: Polygon) -> Self {
        value.0
    }
}
