//! Benchmark profiles for the Lodestar localization engine.
//!
//! Provides pre-built range sets shaped like real sensor dumps: a dense
//! cluster of wide ranges that all reach one planted target, plus a tenth
//! of narrower ranges scattered as noise. Centers spread over a cube of
//! side `2 * 10^8`.
//!
//! - [`reference_profile`]: 100 ranges
//! - [`stress_profile`]: 1000 ranges
//! - [`render`]: back to the `pos=<x,y,z>, r=N` text format

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fmt::Write;

use lodestar_core::Point3;
use lodestar_space::Range;
use lodestar_test_utils::random_ranges;

/// Half the side of the cube range centers are drawn from.
pub const EXTENT: i64 = 100_000_000;

/// Largest amount by which a cluster range reaches past the target.
pub const SLACK: i64 = 1_000;

/// Build a reference benchmark profile: 100 ranges.
pub fn reference_profile(seed: u64) -> Vec<Range> {
    sensor_dump(seed, 100)
}

/// Build a stress benchmark profile: 1000 ranges.
///
/// Same shape as [`reference_profile`] at 10x the range count.
pub fn stress_profile(seed: u64) -> Vec<Range> {
    sensor_dump(seed, 1000)
}

/// The point every cluster range of a profile built from `seed` reaches.
/// Lies in `[-EXTENT / 2, EXTENT / 2]^3`.
pub fn planted_target(seed: u64) -> Point3 {
    random_ranges(seed ^ 0x5eed_7a26, 1, EXTENT / 2, 0)
        .first()
        .map_or(Point3::ORIGIN, |r| r.center)
}

/// `n` ranges: `n - n / 10` cluster ranges whose radius is their distance
/// to [`planted_target`] plus up to [`SLACK`], then `n / 10` noise ranges
/// with radii in `[EXTENT / 20, EXTENT / 10]`.
pub fn sensor_dump(seed: u64, n: usize) -> Vec<Range> {
    let target = planted_target(seed);
    let noise = n / 10;

    let cluster = random_ranges(seed, n - noise, EXTENT, SLACK).into_iter().map(|r| {
        let reach: i64 = r
            .center
            .axes()
            .into_iter()
            .zip(target.axes())
            .map(|(c, t)| (c - t).abs())
            .sum();
        Range::new(r.center, reach + r.radius)
    });
    let floor = EXTENT / 20;
    let scattered = random_ranges(seed.wrapping_add(1), noise, EXTENT, EXTENT / 10 - floor)
        .into_iter()
        .map(|r| Range::new(r.center, r.radius + floor));

    cluster.chain(scattered).collect()
}

/// Render ranges one per line, in the format `parse_ranges` reads.
pub fn render(ranges: &[Range]) -> String {
    let mut out = String::with_capacity(ranges.len() * 48);
    for r in ranges {
        let Point3 { x, y, z } = r.center;
        // Writing to a String cannot fail.
        let _ = writeln!(out, "pos=<{x},{y},{z}>, r={}", r.radius);
    }
    out
}
