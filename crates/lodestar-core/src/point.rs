//! The [`Point3`] lattice coordinate and Manhattan distance.

use std::fmt;

/// A point on the 3D integer lattice.
///
/// Ordering is lexicographic on `(x, y, z)`. The derive relies on field
/// declaration order, so do not reorder the fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point3 {
    /// X coordinate.
    pub x: i64,
    /// Y coordinate.
    pub y: i64,
    /// Z coordinate.
    pub z: i64,
}

impl Point3 {
    /// The lattice origin `(0, 0, 0)`.
    pub const ORIGIN: Point3 = Point3::new(0, 0, 0);

    /// Create a point from its three coordinates.
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Coordinates as an array, indexed by axis (`0 = x`, `1 = y`, `2 = z`).
    pub const fn axes(&self) -> [i64; 3] {
        [self.x, self.y, self.z]
    }

    /// Build a point from an axis-indexed array.
    pub const fn from_axes(axes: [i64; 3]) -> Self {
        Self::new(axes[0], axes[1], axes[2])
    }

    /// Manhattan (L1) distance to `other`.
    ///
    /// Each per-axis difference of two `i64` values fits in `u64`, and the
    /// sum of three fits in `u128`, so this never wraps.
    pub fn manhattan_distance(&self, other: &Point3) -> u128 {
        self.axes()
            .iter()
            .zip(other.axes())
            .map(|(&a, b)| u128::from(a.abs_diff(b)))
            .sum()
    }

    /// Manhattan distance to [`Point3::ORIGIN`].
    pub fn distance_to_origin(&self) -> u128 {
        self.manhattan_distance(&Self::ORIGIN)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{},{},{}>", self.x, self.y, self.z)
    }
}

impl From<(i64, i64, i64)> for Point3 {
    fn from((x, y, z): (i64, i64, i64)) -> Self {
        Self::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn distance_to_self_is_zero() {
        let p = Point3::new(-7, 3, 12);
        assert_eq!(p.manhattan_distance(&p), 0);
    }

    #[test]
    fn distance_sums_axis_differences() {
        let a = Point3::new(1, -2, 3);
        let b = Point3::new(-4, 5, 3);
        assert_eq!(a.manhattan_distance(&b), 5 + 7);
    }

    #[test]
    fn distance_at_i64_extremes_does_not_wrap() {
        let a = Point3::new(i64::MIN, i64::MIN, i64::MIN);
        let b = Point3::new(i64::MAX, i64::MAX, i64::MAX);
        let axis = u128::from(u64::MAX);
        assert_eq!(a.manhattan_distance(&b), 3 * axis);
    }

    #[test]
    fn ordering_is_lexicographic() {
        let mut pts = vec![
            Point3::new(1, 0, 0),
            Point3::new(0, 5, 0),
            Point3::new(0, 0, 9),
            Point3::new(0, 5, -1),
        ];
        pts.sort();
        assert_eq!(
            pts,
            vec![
                Point3::new(0, 0, 9),
                Point3::new(0, 5, -1),
                Point3::new(0, 5, 0),
                Point3::new(1, 0, 0),
            ]
        );
    }

    #[test]
    fn display_matches_input_format() {
        assert_eq!(Point3::new(10, -12, 0).to_string(), "<10,-12,0>");
    }

    #[test]
    fn axes_roundtrip() {
        let p = Point3::new(4, -5, 6);
        assert_eq!(Point3::from_axes(p.axes()), p);
        assert_eq!(Point3::from((4, -5, 6)), p);
    }

    proptest! {
        #[test]
        fn distance_is_metric(
            ax in -1000i64..1000, ay in -1000i64..1000, az in -1000i64..1000,
            bx in -1000i64..1000, by in -1000i64..1000, bz in -1000i64..1000,
            cx in -1000i64..1000, cy in -1000i64..1000, cz in -1000i64..1000,
        ) {
            let a = Point3::new(ax, ay, az);
            let b = Point3::new(bx, by, bz);
            let c = Point3::new(cx, cy, cz);

            // Symmetric.
            prop_assert_eq!(a.manhattan_distance(&b), b.manhattan_distance(&a));
            // Triangle inequality.
            prop_assert!(a.manhattan_distance(&c) <= a.manhattan_distance(&b) + b.manhattan_distance(&c));
        }
    }
}
