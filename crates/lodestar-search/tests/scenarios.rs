use lodestar_core::{LocateError, Point3};
use lodestar_search::{localize, strongest_coverage, Localizer, SearchConfig};
use lodestar_space::{parse_ranges, Range, SplitPolicy};
use lodestar_test_utils::{coverage_sample, localization_sample};

fn range(x: i64, y: i64, z: i64, r: i64) -> Range {
    Range::new(Point3::new(x, y, z), r)
}

#[test]
fn localization_sample_finds_twelve_twelve_twelve() {
    let loc = localize(&localization_sample()).unwrap();
    assert_eq!(loc.point, Point3::new(12, 12, 12));
    assert_eq!(loc.overlap_count, 5);
    assert_eq!(loc.distance_to_origin, 36);
}

#[test]
fn coverage_sample_strongest_reaches_seven() {
    let cov = strongest_coverage(&coverage_sample()).unwrap();
    assert_eq!(cov.strongest, 0);
    assert_eq!(cov.in_range, 7);
}

#[test]
fn coverage_sample_localizes_next_to_origin() {
    let loc = localize(&coverage_sample()).unwrap();
    assert_eq!(loc.point, Point3::new(1, 0, 0));
    assert_eq!(loc.overlap_count, 3);
    assert_eq!(loc.distance_to_origin, 1);
}

#[test]
fn single_range_at_origin() {
    let loc = localize(&[range(0, 0, 0, 5)]).unwrap();
    assert_eq!(loc.point, Point3::ORIGIN);
    assert_eq!(loc.overlap_count, 1);
    assert_eq!(loc.distance_to_origin, 0);
}

#[test]
fn tied_clusters_choose_the_closer_one() {
    // Two pairs, each with a two-range intersection. The far pair comes
    // first in the input; the near pair must still win.
    let ranges = [
        range(20, 20, 20, 1),
        range(21, 20, 20, 1),
        range(-5, 0, 0, 1),
        range(-6, 0, 0, 1),
    ];
    let loc = localize(&ranges).unwrap();
    assert_eq!(loc.point, Point3::new(-5, 0, 0));
    assert_eq!(loc.overlap_count, 2);
    assert_eq!(loc.distance_to_origin, 5);
}

#[test]
fn tied_distance_breaks_to_smallest_point() {
    // Points at distance 4 on the x and y axes, each covered once.
    let ranges = [range(4, 0, 0, 0), range(0, 4, 0, 0)];
    let loc = localize(&ranges).unwrap();
    assert_eq!(loc.point, Point3::new(0, 4, 0));
    assert_eq!(loc.overlap_count, 1);
}

#[test]
fn empty_input_reports_empty_input() {
    assert_eq!(localize(&[]), Err(LocateError::EmptyInput));
}

#[test]
fn realistic_magnitudes_converge() {
    let ranges = parse_ranges(
        "pos=<-48613546,27548401,108209164>, r=99624381
pos=<51087633,31234006,17399290>, r=75423651
pos=<20473617,-3578243,51234021>, r=84726382
pos=<12000000,12000000,12000000>, r=60000000
pos=<-90000000,80000000,-70000000>, r=50000000
",
    )
    .unwrap();
    let (loc, stats) = Localizer::default().localize(&ranges).unwrap();
    let containing = ranges.iter().filter(|r| r.contains(&loc.point)).count();
    assert_eq!(loc.overlap_count, containing);
    assert!(loc.overlap_count >= 1);
    assert!(stats.expansions > 0);
}

#[test]
fn repeated_runs_are_identical() {
    let ranges = localization_sample();
    let localizer = Localizer::default();
    let first = localizer.localize(&ranges).unwrap();
    for _ in 0..5 {
        assert_eq!(localizer.localize(&ranges).unwrap(), first);
    }
}

#[test]
fn longest_axis_policy_matches_default() {
    let localizer = Localizer::new(SearchConfig {
        split_policy: SplitPolicy::LongestAxis,
        ..SearchConfig::default()
    })
    .unwrap();
    let (loc, _) = localizer.localize(&localization_sample()).unwrap();
    assert_eq!(loc, localize(&localization_sample()).unwrap());
}
