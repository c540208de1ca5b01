//! Region splitting compliance test helpers.
//!
//! These functions verify that a split satisfies the invariants the
//! search relies on. Reused across the region and range test modules.

use crate::range::Range;
use crate::region::{Region, SplitPolicy};
use indexmap::IndexSet;
use lodestar_core::Point3;

/// Assert that splitting `parent` under `policy` partitions its points:
/// children are pairwise disjoint, lie inside the parent, and their union
/// is the parent. Enumerates points, so keep `parent` small.
pub fn assert_partition(parent: &Region, policy: SplitPolicy) {
    let children = parent.split(policy);
    if parent.is_terminal() {
        assert!(children.is_empty(), "terminal {parent:?} produced children");
        return;
    }
    assert!(
        children.len() >= 2,
        "non-terminal {parent:?} produced {} children",
        children.len()
    );

    let mut seen: IndexSet<Point3> = IndexSet::new();
    for child in &children {
        for p in child.points() {
            assert!(parent.contains(&p), "{p:?} from {child:?} lies outside {parent:?}");
            assert!(seen.insert(p), "{p:?} appears in more than one child of {parent:?}");
        }
    }

    let expected: IndexSet<Point3> = parent.points().collect();
    assert_eq!(seen.len(), expected.len(), "children of {parent:?} leave gaps");
    assert!(seen.iter().all(|p| expected.contains(p)));
}

/// Assert that no child of `parent` overlaps more ranges than the parent.
pub fn assert_monotone(parent: &Region, policy: SplitPolicy, ranges: &[Range]) {
    let count = |r: &Region| ranges.iter().filter(|range| range.overlaps(r)).count();
    let parent_count = count(parent);
    for child in parent.split(policy) {
        let child_count = count(&child);
        assert!(
            child_count <= parent_count,
            "child {child:?} overlaps {child_count} ranges, parent {parent:?} only {parent_count}"
        );
    }
}
