//! Point-in-region lookup across a set of regions.

use super::{Coordinate, Region};

/// Names of every region whose border contains `point`, sorted ascending.
///
/// Regions may overlap, so more than one name can be returned. An empty
/// vector means the point lies outside every region.
///
/// # Examples
/// ```
/// use region_server::domain::{Coordinate, Region, regions_containing};
///
/// let square = Region::new(
///     "Square",
///     [[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0], [0.0, 0.0]]
///         .map(Coordinate::from)
///         .to_vec(),
/// )
/// .expect("valid region");
/// let names = regions_containing(&[square], Coordinate::lat_lng(5.0, 5.0));
/// assert_eq!(names, ["Square"]);
/// ```
#[must_use]
pub fn regions_containing(regions: &[Region], point: Coordinate) -> Vec<String> {
    let mut names: Vec<String> = regions
        .iter()
        .filter(|region| region.contains(point))
        .map(|region| region.name().to_owned())
        .collect();
    names.sort_unstable();
    names
}
