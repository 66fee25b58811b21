//! Longitude/latitude value type.
//!
//! Coordinates are stored longitude first to mirror the RFC 7946
//! `[longitude, latitude]` position layout used on the wire, while
//! [`Coordinate::lat_lng`] accepts arguments in natural reading order.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when decoding a coordinate from its array form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoordinateError {
    /// The position did not contain exactly a longitude and a latitude.
    #[error("invalid coordinate: expecting latitude and longitude (got {len} values)")]
    WrongArity {
        /// Number of values supplied.
        len: usize,
    },
}

/// A single point on the sphere expressed in degrees.
///
/// No range validation is applied; any finite pair is accepted.
///
/// # Examples
/// ```
/// use region_server::domain::Coordinate;
///
/// let point = Coordinate::lat_lng(40.2, -75.1);
/// assert_eq!(point.lng(), -75.1);
/// assert_eq!(point.to_string(), "[-75.1, 40.2]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "[f64; 2]")]
pub struct Coordinate {
    lng: f64,
    lat: f64,
}

impl Coordinate {
    /// Build a coordinate from latitude and longitude, in that order.
    #[must_use]
    pub const fn lat_lng(lat: f64, lng: f64) -> Self {
        Self { lng, lat }
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn lng(&self) -> f64 {
        self.lng
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Return the position as `[longitude, latitude]`.
    #[must_use]
    pub const fn as_array(self) -> [f64; 2] {
        [self.lng, self.lat]
    }

    /// Copy of this coordinate with the latitude replaced.
    pub(crate) const fn with_lat(self, lat: f64) -> Self {
        Self { lng: self.lng, lat }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lng, self.lat)
    }
}

/// Interprets the array in wire order: `[longitude, latitude]`.
impl From<[f64; 2]> for Coordinate {
    fn from([lng, lat]: [f64; 2]) -> Self {
        Self::lat_lng(lat, lng)
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(value: Coordinate) -> Self {
        value.as_array()
    }
}

impl TryFrom<Vec<f64>> for Coordinate {
    type Error = CoordinateError;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        match value.as_slice() {
            [lng, lat] => Ok(Self::lat_lng(*lat, *lng)),
            other => Err(CoordinateError::WrongArity { len: other.len() }),
        }
    }
}
