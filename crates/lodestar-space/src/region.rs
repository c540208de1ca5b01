//! Axis-aligned lattice regions and the splitting step of the search.

use crate::error::SpaceError;
use lodestar_core::Point3;
use smallvec::SmallVec;

/// Children produced by one split. Eight covers the all-axis case inline.
pub type Children = SmallVec<[Region; 8]>;

/// How a non-terminal region is divided into children.
///
/// Both policies partition the parent exactly, so the search result does
/// not depend on the choice. They differ in how many children each step
/// produces and therefore in frontier shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SplitPolicy {
    /// Bisect every axis with positive span at once (2, 4 or 8 children).
    #[default]
    AllAxes,
    /// Bisect only the axis with the largest span (always 2 children).
    /// Ties go to the lowest axis index.
    LongestAxis,
}

/// A closed axis-aligned cuboid of lattice points.
///
/// Holds every point `p` with `low[a] <= p[a] <= high[a]` on each axis `a`.
/// Construction enforces `low <= high` per axis, so a region is never empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Region {
    low: Point3,
    high: Point3,
}

impl Region {
    /// Create a region from its inclusive corners.
    ///
    /// Returns `Err(SpaceError::InvalidRegion)` if `low > high` on any axis.
    pub fn new(low: Point3, high: Point3) -> Result<Self, SpaceError> {
        for (axis, (lo, hi)) in low.axes().into_iter().zip(high.axes()).enumerate() {
            if lo > hi {
                return Err(SpaceError::InvalidRegion {
                    reason: format!("axis {axis}: low {lo} exceeds high {hi}"),
                });
            }
        }
        Ok(Self { low, high })
    }

    /// The single-point region `{p}`.
    pub const fn point(p: Point3) -> Self {
        Self { low: p, high: p }
    }

    /// Smallest region containing every point, or `None` for no points.
    pub fn bounding<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point3>,
    {
        let mut points = points.into_iter();
        let first = Self::point(points.next()?);
        Some(points.fold(first, |region, p| region.including(p)))
    }

    /// Smallest region containing both `self` and `p`.
    pub fn including(&self, p: Point3) -> Self {
        Self {
            low: Point3::new(self.low.x.min(p.x), self.low.y.min(p.y), self.low.z.min(p.z)),
            high: Point3::new(
                self.high.x.max(p.x),
                self.high.y.max(p.y),
                self.high.z.max(p.z),
            ),
        }
    }

    /// Minimum corner (inclusive).
    pub fn low(&self) -> Point3 {
        self.low
    }

    /// Maximum corner (inclusive).
    pub fn high(&self) -> Point3 {
        self.high
    }

    /// `high - low` on `axis`. Zero means the axis is degenerate.
    pub fn span(&self, axis: usize) -> u64 {
        self.low.axes()[axis].abs_diff(self.high.axes()[axis])
    }

    /// Whether the region holds exactly one lattice point.
    pub fn is_terminal(&self) -> bool {
        self.low == self.high
    }

    /// Number of lattice points in the region.
    ///
    /// Each axis contributes up to `2^64` points, so the product can exceed
    /// `u128` for regions spanning the full `i64` range on all three axes.
    /// That case is reported as `Err(SpaceError::VolumeOverflow)`.
    pub fn volume(&self) -> Result<u128, SpaceError> {
        (0..3)
            .map(|axis| u128::from(self.span(axis)) + 1)
            .try_fold(1u128, u128::checked_mul)
            .ok_or(SpaceError::VolumeOverflow)
    }

    /// Whether `p` lies inside the region (boundary inclusive).
    pub fn contains(&self, p: &Point3) -> bool {
        (0..3).all(|axis| {
            let v = p.axes()[axis];
            self.low.axes()[axis] <= v && v <= self.high.axes()[axis]
        })
    }

    /// Manhattan distance from `p` to the nearest point of the region.
    ///
    /// Zero when `p` is inside. Used as the lower bound on
    /// distance-to-origin for every point the region holds.
    pub fn distance_from(&self, p: &Point3) -> u128 {
        (0..3)
            .map(|axis| {
                let (lo, hi, v) = (self.low.axes()[axis], self.high.axes()[axis], p.axes()[axis]);
                if v < lo {
                    u128::from(lo.abs_diff(v))
                } else if v > hi {
                    u128::from(v.abs_diff(hi))
                } else {
                    0
                }
            })
            .sum()
    }

    /// Partition the region into children according to `policy`.
    ///
    /// On each split axis the left child keeps `[low, mid]` and the right
    /// child takes `[mid + 1, high]`, with `mid = floor((low + high) / 2)`.
    /// Degenerate axes are never split. A terminal region has no children.
    pub fn split(&self, policy: SplitPolicy) -> Children {
        let mut children = Children::new();
        if self.is_terminal() {
            return children;
        }

        let mut split_axes = [false; 3];
        match policy {
            SplitPolicy::AllAxes => {
                for (axis, flag) in split_axes.iter_mut().enumerate() {
                    *flag = self.span(axis) > 0;
                }
            }
            SplitPolicy::LongestAxis => {
                // max_by_key keeps the last maximum; iterate in reverse so
                // the lowest axis index wins ties.
                if let Some(axis) = (0..3).rev().max_by_key(|&axis| self.span(axis)) {
                    split_axes[axis] = self.span(axis) > 0;
                }
            }
        }

        let low = self.low.axes();
        let high = self.high.axes();
        let intervals: [SmallVec<[(i64, i64); 2]>; 3] = std::array::from_fn(|axis| {
            let (lo, hi) = (low[axis], high[axis]);
            if split_axes[axis] {
                let mid = midpoint(lo, hi);
                SmallVec::from_buf([(lo, mid), (mid + 1, hi)])
            } else {
                let mut one = SmallVec::new();
                one.push((lo, hi));
                one
            }
        });

        for &(x0, x1) in &intervals[0] {
            for &(y0, y1) in &intervals[1] {
                for &(z0, z1) in &intervals[2] {
                    children.push(Region {
                        low: Point3::new(x0, y0, z0),
                        high: Point3::new(x1, y1, z1),
                    });
                }
            }
        }
        children
    }

    /// Iterate every lattice point in `x`, then `y`, then `z` order.
    ///
    /// Intended for small regions (tests, brute-force oracles); the count is
    /// [`volume`](Self::volume).
    pub fn points(&self) -> impl Iterator<Item = Point3> + '_ {
        (self.low.x..=self.high.x).flat_map(move |x| {
            (self.low.y..=self.high.y)
                .flat_map(move |y| (self.low.z..=self.high.z).map(move |z| Point3::new(x, y, z)))
        })
    }
}

/// `floor((lo + hi) / 2)` without overflowing `i64`.
fn midpoint(lo: i64, hi: i64) -> i64 {
    let mid = (i128::from(lo) + i128::from(hi)).div_euclid(2);
    // The mean of two i64 values lies between them, so it fits.
    mid as i64
}
