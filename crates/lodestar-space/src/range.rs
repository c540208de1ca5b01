//! Sensor ranges: Manhattan balls around a lattice center.

use crate::error::SpaceError;
use crate::region::Region;
use lodestar_core::Point3;

/// Every lattice point within `radius` Manhattan distance of `center`.
///
/// A plain structural value: ranges are loaded once and shared by
/// reference for the whole search. The radius is signed so that input
/// with a negative radius can be represented and then rejected by
/// [`validate`](Range::validate) instead of being silently reinterpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Range {
    /// Center of the ball.
    pub center: Point3,
    /// Maximum Manhattan distance from `center` (inclusive).
    pub radius: i64,
}

impl Range {
    /// Create a range. Does not validate; see [`validate`](Range::validate).
    pub const fn new(center: Point3, radius: i64) -> Self {
        Self { center, radius }
    }

    /// Reject a negative radius.
    pub fn validate(&self) -> Result<(), SpaceError> {
        if self.radius < 0 {
            return Err(SpaceError::NegativeRadius {
                radius: self.radius,
            });
        }
        Ok(())
    }

    /// Whether `p` lies within the range (boundary inclusive).
    pub fn contains(&self, p: &Point3) -> bool {
        match u128::try_from(self.radius) {
            Ok(radius) => self.center.manhattan_distance(p) <= radius,
            Err(_) => false,
        }
    }

    /// Whether at least one lattice point of `region` lies within the range.
    ///
    /// Spends the radius as a budget: on each axis, the cost is how far the
    /// center must move to enter `[low, high]` on that axis. The region is
    /// reachable iff the budget never goes negative. O(1) and exact.
    pub fn overlaps(&self, region: &Region) -> bool {
        let center = self.center.axes();
        let low = region.low().axes();
        let high = region.high().axes();

        let mut budget = i128::from(self.radius);
        for axis in 0..3 {
            let c = i128::from(center[axis]);
            let (lo, hi) = (i128::from(low[axis]), i128::from(high[axis]));
            let cost = if c < lo {
                lo - c
            } else if c > hi {
                c - hi
            } else {
                0
            };
            budget -= cost;
            if budget < 0 {
                return false;
            }
        }
        true
    }
}
