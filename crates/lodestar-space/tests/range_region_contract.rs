use lodestar_core::Point3;
use lodestar_space::{parse_ranges, Range, Region, SpaceError, SplitPolicy};

#[test]
fn parsed_ranges_overlap_their_own_centers() {
    let ranges = parse_ranges(
        "pos=<0,0,0>, r=4\npos=<1,0,0>, r=1\npos=<4,0,0>, r=3\npos=<0,2,0>, r=0\n",
    )
    .unwrap();
    for range in &ranges {
        assert!(range.overlaps(&Region::point(range.center)));
        assert!(range.contains(&range.center));
    }
}

#[test]
fn bounding_region_of_centers_overlaps_every_range() {
    let ranges = [
        Range::new(Point3::new(-40, 3, 9), 0),
        Range::new(Point3::new(12, -8, 1), 2),
        Range::new(Point3::new(5, 5, 5), 100),
    ];
    let region = Region::bounding(ranges.iter().map(|r| r.center)).unwrap();
    assert!(ranges.iter().all(|r| r.overlaps(&region)));
}

#[test]
fn repeated_splitting_reaches_terminal_regions() {
    for policy in [SplitPolicy::AllAxes, SplitPolicy::LongestAxis] {
        let mut stack = vec![Region::new(Point3::new(-3, 0, 2), Point3::new(4, 5, 2)).unwrap()];
        let mut terminals = 0u128;
        while let Some(region) = stack.pop() {
            if region.is_terminal() {
                terminals += 1;
            } else {
                stack.extend(region.split(policy));
            }
        }
        assert_eq!(terminals, 8 * 6);
    }
}

#[test]
fn split_depth_is_logarithmic_at_realistic_magnitudes() {
    let mut region = Region::new(
        Point3::new(-150_000_000, -150_000_000, -150_000_000),
        Point3::new(150_000_000, 150_000_000, 150_000_000),
    )
    .unwrap();
    let mut depth = 0;
    while !region.is_terminal() {
        region = region.split(SplitPolicy::AllAxes)[0];
        depth += 1;
    }
    assert!(depth <= 32, "depth {depth} exceeds 32");
}

#[test]
fn space_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(SpaceError::VolumeOverflow);
    assert!(err.to_string().contains("volume"));
}
