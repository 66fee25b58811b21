//! Unit-sphere vector helpers used to decide ring orientation.
//!
//! Vertices are projected onto the unit sphere and the ring is treated as a
//! closed spherical loop. The loop's turning angle is the sum of the signed
//! angles between consecutive edges: positive for counter-clockwise loops,
//! negative for clockwise ones.
#![expect(
    clippy::float_arithmetic,
    reason = "spherical trigonometry is inherently floating point"
)]

use std::cmp::Ordering;
use std::f64::consts::PI;

use super::Coordinate;

/// Point on the unit sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct UnitVector {
    x: f64,
    y: f64,
    z: f64,
}

impl UnitVector {
    const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub(crate) fn from_coordinate(coordinate: Coordinate) -> Self {
        let lat = coordinate.lat().to_radians();
        let lng = coordinate.lng().to_radians();
        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_lng, cos_lng) = lng.sin_cos();
        Self {
            x: cos_lat * cos_lng,
            y: cos_lat * sin_lng,
            z: sin_lat,
        }
    }

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }

    fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    fn norm(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Direction of `self × other`, computed as `(a + b) × (b - a)` which
    /// keeps precision when the two points are nearly identical.
    fn point_cross(self, other: Self) -> Self {
        self.add(other).cross(other.sub(self))
    }

    fn angle(self, other: Self) -> f64 {
        self.cross(other).norm().atan2(self.dot(other))
    }

    fn lexicographic(self, other: Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
            .then_with(|| self.z.total_cmp(&other.z))
    }
}

/// Signed exterior angle at `b` when travelling `a -> b -> c`.
fn turn_angle(a: UnitVector, b: UnitVector, c: UnitVector) -> f64 {
    let angle = a.point_cross(b).angle(b.point_cross(c));
    if c.cross(a).dot(b) > 0.0 {
        angle
    } else {
        -angle
    }
}

/// Closed loop of unit vectors; the closing edge is implicit.
struct Loop {
    vertices: Vec<UnitVector>,
}

impl Loop {
    fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Vertex at `index`, wrapping past the end of the loop.
    fn vertex(&self, index: usize) -> UnitVector {
        self.vertices
            .get(index.rem_euclid(self.len()))
            .copied()
            .unwrap_or(UnitVector::ORIGIN)
    }

    fn step(&self, index: usize, forward: bool) -> usize {
        if forward {
            (index + 1).rem_euclid(self.len())
        } else {
            (index + self.len() - 1).rem_euclid(self.len())
        }
    }

    /// Pick a start vertex and direction that do not depend on how the
    /// ring was rotated, so reversing a ring exactly negates its sum.
    fn canonical_start(&self) -> (usize, bool) {
        let first = (1..self.len()).fold(0, |best, index| {
            if self.vertex(index).lexicographic(self.vertex(best)) == Ordering::Less {
                index
            } else {
                best
            }
        });
        let next = self.vertex(self.step(first, true));
        let previous = self.vertex(self.step(first, false));
        (first, next.lexicographic(previous) == Ordering::Less)
    }

    fn turn_at(&self, index: usize, forward: bool) -> f64 {
        turn_angle(
            self.vertex(self.step(index, !forward)),
            self.vertex(index),
            self.vertex(self.step(index, forward)),
        )
    }

    fn turning_angle(&self) -> f64 {
        if self.len() < 3 {
            return 0.0;
        }

        let (mut index, forward) = self.canonical_start();
        let mut sum = self.turn_at(index, forward);
        let mut compensation = 0.0;
        for _ in 1..self.len() {
            index = self.step(index, forward);
            let angle = self.turn_at(index, forward) + compensation;
            let previous = sum;
            sum += angle;
            compensation = (previous - sum) + angle;
        }

        let max_curvature = 2.0 * PI - 4.0 * f64::EPSILON;
        let total = sum + compensation;
        let signed = if forward { total } else { -total };
        signed.clamp(-max_curvature, max_curvature)
    }
}

/// Turning angle of a closed ring whose last coordinate repeats the first.
///
/// The duplicated closing vertex is dropped before the loop is built.
pub(crate) fn turning_angle(ring: &[Coordinate]) -> f64 {
    let open = ring.split_last().map_or(ring, |(_, head)| head);
    let vertices = open
        .iter()
        .copied()
        .map(UnitVector::from_coordinate)
        .collect();
    Loop { vertices }.turning_angle()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ring(points: &[[f64; 2]]) -> Vec<Coordinate> {
        points.iter().copied().map(Coordinate::from).collect()
    }

    #[rstest]
    fn projects_equator_prime_meridian_onto_x_axis() {
        let v = UnitVector::from_coordinate(Coordinate::lat_lng(0.0, 0.0));
        assert!((v.x - 1.0).abs() < 1e-15);
        assert!(v.y.abs() < 1e-15);
        assert!(v.z.abs() < 1e-15);
    }

    #[rstest]
    fn counter_clockwise_square_turns_positive() {
        let square = ring(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]]);
        assert!(turning_angle(&square) > 0.0);
    }

    #[rstest]
    fn clockwise_square_turns_negative() {
        let square = ring(&[[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0], [0.0, 0.0]]);
        assert!(turning_angle(&square) < 0.0);
    }

    #[rstest]
    fn reversing_a_ring_negates_the_angle_exactly() {
        let mut points = ring(&[
            [-77.475793, 39.719623],
            [-80.524269, 39.721209],
            [-80.520592, 41.986872],
            [-74.705273, 41.375059],
            [-75.142901, 39.881602],
            [-77.475793, 39.719623],
        ]);
        let forward = turning_angle(&points);
        points.reverse();
        assert_eq!(turning_angle(&points), -forward);
    }

    #[rstest]
    fn rotating_the_start_vertex_keeps_the_angle() {
        let a = ring(&[[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0], [0.0, 0.0]]);
        let b = ring(&[[10.0, 10.0], [10.0, 0.0], [0.0, 0.0], [0.0, 10.0], [10.0, 10.0]]);
        assert_eq!(turning_angle(&a), turning_angle(&b));
    }

    #[rstest]
    #[case(&[[0.0, 0.0], [1.0, 1.0], [2.0, 2.0], [0.0, 0.0]], true)]
    #[case(&[[0.0, 0.0], [2.0, 2.0], [1.0, 1.0], [0.0, 0.0]], false)]
    fn sliver_rings_follow_sphere_curvature(#[case] points: &[[f64; 2]], #[case] positive: bool) {
        assert_eq!(turning_angle(&ring(points)) > 0.0, positive);
    }

    #[rstest]
    fn degenerate_loops_have_no_turning() {
        assert_eq!(turning_angle(&ring(&[[0.0, 0.0], [1.0, 1.0], [0.0, 0.0]])), 0.0);
    }
}
