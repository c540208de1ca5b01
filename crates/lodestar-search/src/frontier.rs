//! The best-first frontier of unexplored regions.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use lodestar_space::Region;

/// A region waiting in the frontier, with its exact overlap count.
///
/// Lives only between a push and the matching pop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchNode {
    /// The unexplored region.
    pub region: Region,
    /// Number of ranges that reach at least one point of `region`.
    pub overlap_count: usize,
    /// Smallest distance-to-origin of any point in `region`.
    pub distance_bound: u128,
}

impl Ord for SearchNode {
    /// Greater means "pop first": higher overlap count, then smaller
    /// distance bound, then lexicographically smaller low corner.
    ///
    /// Frontier regions are pairwise disjoint, so two distinct nodes never
    /// share a low corner and the order is total. The high-corner step only
    /// keeps `Ord` consistent with the derived `Eq`.
    fn cmp(&self, other: &Self) -> Ordering {
        self.overlap_count
            .cmp(&other.overlap_count)
            .then_with(|| other.distance_bound.cmp(&self.distance_bound))
            .then_with(|| other.region.low().cmp(&self.region.low()))
            .then_with(|| other.region.high().cmp(&self.region.high()))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Max-priority queue of [`SearchNode`]s.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<SearchNode>,
}

impl Frontier {
    /// An empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a node.
    pub fn push(&mut self, node: SearchNode) {
        self.heap.push(node);
    }

    /// Remove and return the best node.
    pub fn pop(&mut self) -> Option<SearchNode> {
        self.heap.pop()
    }

    /// Number of queued nodes.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether no nodes are queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
