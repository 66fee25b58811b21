//! Named region bounded by a polygon.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::geo::{Coordinate, Polygon, PolygonError};

/// Minimum number of characters in a region name.
pub const MIN_NAME_LEN: usize = 2;

/// Validation errors returned by [`Region::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegionValidationError {
    /// The name has fewer than [`MIN_NAME_LEN`] characters.
    #[error("invalid name for state, minimum length is {min}: {name}")]
    NameTooShort {
        /// Required minimum length.
        min: usize,
        /// Name as supplied.
        name: String,
    },
    /// The border ring is structurally invalid.
    #[error(transparent)]
    Border(#[from] PolygonError),
}

/// A named area such as a state or province.
///
/// ## Invariants
/// - `name` holds at least [`MIN_NAME_LEN`] characters.
/// - `border` is a closed, clockwise ring.
///
/// # Examples
/// ```
/// use region_server::domain::{Coordinate, Region};
///
/// let region = Region::new(
///     "Square",
///     [[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0], [0.0, 0.0]]
///         .map(Coordinate::from)
///         .to_vec(),
/// )
/// .expect("valid region");
/// assert!(region.contains(Coordinate::lat_lng(5.0, 5.0)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RegionDto", into = "RegionDto")]
pub struct Region {
    name: String,
    border: Polygon,
}

impl Region {
    /// Validate the name and build the border, repairing its orientation.
    ///
    /// # Errors
    /// Returns [`RegionValidationError::NameTooShort`] for short names and
    /// [`RegionValidationError::Border`] when the ring is malformed.
    pub fn new(
        name: impl Into<String>,
        coordinates: Vec<Coordinate>,
    ) -> Result<Self, RegionValidationError> {
        let name = name.into();
        if name.chars().count() < MIN_NAME_LEN {
            return Err(RegionValidationError::NameTooShort {
                min: MIN_NAME_LEN,
                name,
            });
        }
        let border = Polygon::new(coordinates)?;
        Ok(Self { name, border })
    }

    /// Rebuild this region under a different name, re-running every check.
    ///
    /// # Errors
    /// See [`Region::new`].
    pub fn renamed(self, name: impl Into<String>) -> Result<Self, RegionValidationError> {
        Self::new(name, self.border.into())
    }

    /// Region name as stored.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Border ring, wound clockwise.
    #[must_use]
    pub const fn border(&self) -> &Polygon {
        &self.border
    }

    /// Whether `point` lies inside the border.
    #[must_use]
    pub fn contains(&self, point: Coordinate) -> bool {
        self.border.contains(point)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegionDto {
    state: String,
    border: Vec<Coordinate>,
}

impl From<Region> for RegionDto {
    fn from(value: Region) -> Self {
        Self {
            state: value.name,
            border: value.border.into(),
        }
    }
}

impl TryFrom<RegionDto> for Region {
    type Error = RegionValidationError;

    fn try_from(value: RegionDto) -> Result<Self, Self::Error> {
        let RegionDto { state, border } = value;
        Self::new(state, border)
    }
}
