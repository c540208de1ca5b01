//! The best-first branch-and-bound search driver.
//!
//! # Algorithm
//!
//! The frontier starts with one region: the bounding box of every range
//! center, extended to include the origin. Clamping any lattice point into
//! that box never moves it farther from a center or from the origin, so
//! the box always holds an optimal point.
//!
//! Each iteration pops the best node (see [`SearchNode`]'s ordering). A
//! non-terminal region is split and every child is recounted exactly
//! against all ranges. Because a child's points are a subset of its
//! parent's, a child never overlaps more ranges than its parent; so the
//! first terminal region popped carries the global maximum count `M`.
//!
//! After that, popping continues while the popped node could still hold a
//! better point than the current best: same count `M` and a distance
//! bound no worse than the best distance (see [`Selector::can_improve`]).
//! Every terminal found in that phase is offered to the [`Selector`].
//! Children never rank above their parent in the frontier order, so with
//! exact nodes the phase usually ends at the next pop; the selector still
//! decides, which keeps the answer independent of pop order.
//!
//! Two caps abandon a query: [`SearchConfig::max_expansions`] bounds time
//! and [`SearchConfig::max_frontier`] bounds memory.

use std::error::Error;
use std::fmt;

use lodestar_core::{LocateError, Point3};
use lodestar_space::{Range, Region, SpaceError};
use tracing::{debug, trace};

use crate::config::{ConfigError, SearchConfig};
use crate::frontier::{Frontier, SearchNode};
use crate::metrics::SearchStats;
use crate::select::Selector;

/// The answer to a localization query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Localization {
    /// A point contained in the maximum number of ranges, closest to the
    /// origin among all such points.
    pub point: Point3,
    /// Number of ranges containing `point`.
    pub overlap_count: usize,
    /// Manhattan distance from `point` to the origin.
    pub distance_to_origin: u64,
}

/// A failed query together with the work it did before failing.
///
/// Returned by [`Localizer::run`]. The stats help pick caps for inputs that
/// hit [`LocateError::ExpansionLimit`] or [`LocateError::FrontierLimit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchError {
    /// The underlying error.
    pub kind: LocateError,
    /// Counters up to the point of failure.
    pub stats: SearchStats,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (after {} expansions, peak frontier {})",
            self.kind, self.stats.expansions, self.stats.peak_frontier
        )
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.kind)
    }
}

/// Runs localization queries under a validated [`SearchConfig`].
///
/// Holds no per-query state; every call to
/// [`localize`](Localizer::localize) builds and drops its own frontier.
#[derive(Clone, Debug, Default)]
pub struct Localizer {
    config: SearchConfig,
}

impl Localizer {
    /// Create a localizer, validating `config`.
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find the point covered by the most ranges, nearest the origin on ties.
    ///
    /// # Errors
    ///
    /// - [`LocateError::EmptyInput`] if `ranges` is empty.
    /// - [`LocateError::MalformedRange`] if any radius is negative.
    /// - [`LocateError::ArithmeticOverflow`] if the seed volume does not fit
    ///   in `u128` or the answer's distance does not fit in `u64`.
    /// - [`LocateError::ExpansionLimit`] if the search exceeds
    ///   [`SearchConfig::max_expansions`].
    /// - [`LocateError::FrontierLimit`] if the frontier outgrows
    ///   [`SearchConfig::max_frontier`].
    pub fn localize(&self, ranges: &[Range]) -> Result<(Localization, SearchStats), LocateError> {
        self.run(ranges).map_err(|e| e.kind)
    }

    /// Like [`localize`](Localizer::localize), but a failure keeps the
    /// [`SearchStats`] gathered before it.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(ranges = ranges.len(), policy = ?self.config.split_policy)
    )]
    pub fn run(&self, ranges: &[Range]) -> Result<(Localization, SearchStats), SearchError> {
        if let Err(kind) = check_ranges(ranges) {
            return Err(SearchError {
                kind,
                stats: SearchStats::default(),
            });
        }
        let mut search = Search::new(ranges, &self.config);
        match search.run() {
            Ok(localization) => Ok((localization, search.stats)),
            Err(kind) => {
                debug!(
                    error = %kind,
                    expansions = search.stats.expansions,
                    peak_frontier = search.stats.peak_frontier,
                    "search abandoned"
                );
                Err(SearchError {
                    kind,
                    stats: search.stats,
                })
            }
        }
    }
}

/// Localize with the default [`SearchConfig`].
///
/// Convenience wrapper around [`Localizer::localize`] that drops the stats.
pub fn localize(ranges: &[Range]) -> Result<Localization, LocateError> {
    Localizer::default()
        .localize(ranges)
        .map(|(localization, _)| localization)
}

/// Reject empty input and negative radii before any search work.
pub(crate) fn check_ranges(ranges: &[Range]) -> Result<(), LocateError> {
    if ranges.is_empty() {
        return Err(LocateError::EmptyInput);
    }
    for (index, range) in ranges.iter().enumerate() {
        if let Err(SpaceError::NegativeRadius { radius }) = range.validate() {
            return Err(LocateError::MalformedRange { index, radius });
        }
    }
    Ok(())
}

/// State of one query. Dropped when the query returns.
struct Search<'a> {
    ranges: &'a [Range],
    config: &'a SearchConfig,
    frontier: Frontier,
    selector: Selector,
    stats: SearchStats,
}

impl<'a> Search<'a> {
    fn new(ranges: &'a [Range], config: &'a SearchConfig) -> Self {
        Self {
            ranges,
            config,
            frontier: Frontier::new(),
            selector: Selector::new(),
            stats: SearchStats::default(),
        }
    }

    fn run(&mut self) -> Result<Localization, LocateError> {
        let seed = Region::bounding(self.ranges.iter().map(|r| r.center))
            .ok_or(LocateError::EmptyInput)?
            .including(Point3::ORIGIN);
        self.stats.seed_volume = seed.volume().map_err(|_| LocateError::ArithmeticOverflow {
            context: "seed region volume",
        })?;

        let root = self.node(seed);
        debug!(
            low = %seed.low(),
            high = %seed.high(),
            volume = self.stats.seed_volume,
            overlap = root.overlap_count,
            "seeded frontier"
        );
        self.push(root)?;
        self.drain()?;

        // The seed region is non-empty and every split partitions its
        // parent, so at least one terminal is always reached.
        let best = self
            .selector
            .best()
            .copied()
            .ok_or(LocateError::EmptyInput)?;
        let distance_to_origin =
            u64::try_from(best.distance).map_err(|_| LocateError::ArithmeticOverflow {
                context: "distance to origin",
            })?;

        let localization = Localization {
            point: best.point,
            overlap_count: best.overlap_count,
            distance_to_origin,
        };
        debug!(
            point = %localization.point,
            overlap = localization.overlap_count,
            distance = localization.distance_to_origin,
            expansions = self.stats.expansions,
            "localized"
        );
        Ok(localization)
    }

    /// Pop until the head of the frontier can no longer beat the best
    /// terminal, expanding regions and offering terminals on the way.
    fn drain(&mut self) -> Result<(), LocateError> {
        while let Some(node) = self.frontier.pop() {
            if !self
                .selector
                .can_improve(node.overlap_count, node.distance_bound, node.region.low())
            {
                break;
            }
            if node.region.is_terminal() {
                self.stats.candidates += 1;
                if self.selector.offer(node.region.low(), node.overlap_count) {
                    trace!(point = %node.region.low(), overlap = node.overlap_count, "new best");
                }
                continue;
            }
            self.expand(node)?;
        }
        Ok(())
    }

    /// Split `node` and enqueue its children with exact counts.
    fn expand(&mut self, node: SearchNode) -> Result<(), LocateError> {
        if self.stats.expansions >= self.config.max_expansions {
            return Err(LocateError::ExpansionLimit {
                limit: self.config.max_expansions,
            });
        }
        self.stats.expansions += 1;

        for child in node.region.split(self.config.split_policy) {
            let child = self.node(child);
            debug_assert!(
                child.overlap_count <= node.overlap_count,
                "child {:?} overlaps more ranges than parent {:?}",
                child.region,
                node.region
            );
            self.push(child)?;
        }
        trace!(
            region = ?node.region,
            overlap = node.overlap_count,
            frontier = self.frontier.len(),
            "expanded"
        );
        Ok(())
    }

    fn push(&mut self, node: SearchNode) -> Result<(), LocateError> {
        if self.frontier.len() >= self.config.max_frontier {
            return Err(LocateError::FrontierLimit {
                limit: self.config.max_frontier,
            });
        }
        self.frontier.push(node);
        self.stats.regions_pushed += 1;
        self.stats.peak_frontier = self.stats.peak_frontier.max(self.frontier.len());
        Ok(())
    }

    fn node(&self, region: Region) -> SearchNode {
        SearchNode {
            region,
            overlap_count: self.ranges.iter().filter(|r| r.overlaps(&region)).count(),
            distance_bound: region.distance_from(&Point3::ORIGIN),
        }
    }
}
