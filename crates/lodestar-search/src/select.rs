//! Tie-breaking among terminal candidates.

use lodestar_core::Point3;

/// A terminal point offered to the [`Selector`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// The lattice point.
    pub point: Point3,
    /// Number of ranges containing `point`.
    pub overlap_count: usize,
    /// Manhattan distance from `point` to the origin.
    pub distance: u128,
}

/// Keeps the best candidate seen so far.
///
/// Best means: highest overlap count, then smallest distance to the
/// origin, then lexicographically smallest point. The last step makes the
/// winner independent of the order candidates are offered in.
#[derive(Clone, Debug, Default)]
pub struct Selector {
    best: Option<Candidate>,
}

impl Selector {
    /// A selector with no candidates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a terminal point. Returns `true` if it became the best.
    pub fn offer(&mut self, point: Point3, overlap_count: usize) -> bool {
        let candidate = Candidate {
            point,
            overlap_count,
            distance: point.distance_to_origin(),
        };
        let better = match &self.best {
            None => true,
            Some(best) => {
                overlap_count > best.overlap_count
                    || (overlap_count == best.overlap_count
                        && (candidate.distance, candidate.point) < (best.distance, best.point))
            }
        };
        if better {
            self.best = Some(candidate);
        }
        better
    }

    /// Whether a region could still hold a point that beats the current best.
    ///
    /// `distance_bound` and `low` bound every point of the region from
    /// below (in distance and in lexicographic order), so `false` is exact:
    /// nothing inside the region, nor any region split from it, can win.
    /// Always `true` before the first candidate.
    pub fn can_improve(&self, overlap_count: usize, distance_bound: u128, low: Point3) -> bool {
        let Some(best) = &self.best else {
            return true;
        };
        match overlap_count.cmp(&best.overlap_count) {
            std::cmp::Ordering::Greater => true,
            std::cmp::Ordering::Less => false,
            std::cmp::Ordering::Equal => {
                distance_bound < best.distance
                    || (distance_bound == best.distance && low < best.point)
            }
        }
    }

    /// The current best candidate.
    pub fn best(&self) -> Option<&Candidate> {
        self.best.as_ref()
    }

    /// Consume the selector, returning the winner.
    pub fn into_best(self) -> Option<Candidate> {
        self.best
    }
}
