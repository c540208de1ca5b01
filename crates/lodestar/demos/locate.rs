//! Localize the best-covered point of a range file.
//!
//! Reads `pos=<x,y,z>, r=N` lines from the file given as the first argument
//! (or a small built-in sample), then prints the localization, the search
//! statistics and the strongest range's coverage.
//!
//! Run with:
//!   cargo run --example locate -- ranges.txt
//!   RUST_LOG=lodestar_search=debug cargo run --example locate -- --longest-axis ranges.txt

use std::env;
use std::fs;

use lodestar::prelude::*;
use tracing_subscriber::EnvFilter;

const SAMPLE: &str = "\
pos=<10,12,12>, r=2
pos=<12,14,12>, r=2
pos=<16,12,12>, r=4
pos=<14,14,14>, r=6
pos=<50,50,50>, r=200
pos=<10,10,10>, r=5
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let mut split_policy = SplitPolicy::default();
    let mut path = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--longest-axis" => split_policy = SplitPolicy::LongestAxis,
            _ => path = Some(arg),
        }
    }

    let text = match &path {
        Some(path) => fs::read_to_string(path)?,
        None => SAMPLE.to_string(),
    };
    let ranges = parse_ranges(&text)?;
    println!(
        "Loaded {} ranges from {}",
        ranges.len(),
        path.as_deref().unwrap_or("built-in sample")
    );

    let coverage = strongest_coverage(&ranges)?;
    let strongest = ranges[coverage.strongest];
    println!(
        "Strongest range: #{} at {} r={} reaches {} centers",
        coverage.strongest, strongest.center, strongest.radius, coverage.in_range
    );

    let localizer = Localizer::new(SearchConfig {
        split_policy,
        ..SearchConfig::default()
    })?;
    let (loc, stats) = localizer.run(&ranges)?;
    println!(
        "Best point: {} in {} ranges, distance to origin {}",
        loc.point, loc.overlap_count, loc.distance_to_origin
    );
    println!(
        "Search ({:?}): {} expansions, {} regions pushed, peak frontier {}, {} candidates",
        split_policy, stats.expansions, stats.regions_pushed, stats.peak_frontier, stats.candidates
    );

    Ok(())
}
