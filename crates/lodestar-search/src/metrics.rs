//! Per-query counters for the search driver.
//!
//! [`SearchStats`] describes how much work one query did. It is returned
//! alongside the result by [`Localizer::localize`](crate::Localizer::localize).

/// Work counters collected during a single query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Lattice points in the seed region.
    pub seed_volume: u128,
    /// Non-terminal regions popped and split.
    pub expansions: u64,
    /// Regions pushed onto the frontier, the seed included.
    pub regions_pushed: u64,
    /// Largest frontier size observed.
    pub peak_frontier: usize,
    /// Terminal regions offered to the result selector.
    pub candidates: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stats_are_zero() {
        let s = SearchStats::default();
        assert_eq!(s.seed_volume, 0);
        assert_eq!(s.expansions, 0);
        assert_eq!(s.regions_pushed, 0);
        assert_eq!(s.peak_frontier, 0);
        assert_eq!(s.candidates, 0);
    }
}
