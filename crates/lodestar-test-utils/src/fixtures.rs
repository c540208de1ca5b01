//! Reusable range fixtures and oracles.
//!
//! - [`COVERAGE_SAMPLE`]: nine ranges; the strongest reaches 7 centers.
//! - [`LOCALIZATION_SAMPLE`]: six ranges; best point `(12,12,12)`,
//!   overlap 5, distance 36.
//! - [`brute_force`]: exhaustive scoring of a small region.
//! - [`random_ranges`]: deterministic random range sets.

use lodestar_core::Point3;
use lodestar_space::{parse_ranges, Range, Region};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const COVERAGE_SAMPLE: &str = "\
pos=<0,0,0>, r=4
pos=<1,0,0>, r=1
pos=<4,0,0>, r=3
pos=<0,2,0>, r=1
pos=<0,5,0>, r=3
pos=<0,0,3>, r=1
pos=<1,1,1>, r=1
pos=<1,1,2>, r=1
pos=<1,3,1>, r=1
";

pub const LOCALIZATION_SAMPLE: &str = "\
pos=<10,12,12>, r=2
pos=<12,14,12>, r=2
pos=<16,12,12>, r=4
pos=<14,14,14>, r=6
pos=<50,50,50>, r=200
pos=<10,10,10>, r=5
";

/// Parsed [`COVERAGE_SAMPLE`].
pub fn coverage_sample() -> Vec<Range> {
    parse_ranges(COVERAGE_SAMPLE).expect("fixture must parse")
}

/// Parsed [`LOCALIZATION_SAMPLE`].
pub fn localization_sample() -> Vec<Range> {
    parse_ranges(LOCALIZATION_SAMPLE).expect("fixture must parse")
}

/// Exhaustive answer over a region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BruteForce {
    pub point: Point3,
    pub overlap_count: usize,
    pub distance: u128,
}

/// Score every point of `region` and return the best one.
///
/// Best is highest count, then smallest distance to origin, then the
/// lexicographically smallest point. Enumerates the region, so keep it
/// small.
pub fn brute_force(ranges: &[Range], region: &Region) -> BruteForce {
    region
        .points()
        .map(|p| BruteForce {
            point: p,
            overlap_count: ranges.iter().filter(|r| r.contains(&p)).count(),
            distance: p.distance_to_origin(),
        })
        .min_by(|a, b| {
            b.overlap_count
                .cmp(&a.overlap_count)
                .then(a.distance.cmp(&b.distance))
                .then(a.point.cmp(&b.point))
        })
        .expect("regions are never empty")
}

/// Generate `n` ranges with centers in `[-extent, extent]^3` and radii in
/// `[0, max_radius]`. Same seed, same ranges.
pub fn random_ranges(seed: u64, n: usize, extent: i64, max_radius: i64) -> Vec<Range> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut coord = |lo: i64, hi: i64| {
        let span = lo.abs_diff(hi) + 1;
        lo + (rng.next_u64() % span) as i64
    };
    (0..n)
        .map(|_| {
            let center = Point3::new(
                coord(-extent, extent),
                coord(-extent, extent),
                coord(-extent, extent),
            );
            Range::new(center, coord(0, max_radius))
        })
        .collect()
}
