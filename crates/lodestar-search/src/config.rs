//! Search configuration, validation, and error types.
//!
//! [`SearchConfig`] is the input for constructing a
//! [`Localizer`](crate::Localizer). [`validate()`](SearchConfig::validate)
//! checks its invariants once, before any query runs.

use std::error::Error;
use std::fmt;

use lodestar_space::SplitPolicy;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SearchConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_expansions` is zero, so no non-trivial query could finish.
    ZeroExpansionLimit,
    /// `max_frontier` is zero, so not even the seed region fits.
    ZeroFrontierLimit,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroExpansionLimit => write!(f, "max_expansions must be at least 1"),
            Self::ZeroFrontierLimit => write!(f, "max_frontier must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

// ── SearchConfig ───────────────────────────────────────────────────

/// Tuning for one [`Localizer`](crate::Localizer).
///
/// No field changes the answer of a query that completes: both split
/// policies partition regions exactly, and the caps only decide whether a
/// query is abandoned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// How non-terminal regions are divided. Default: [`SplitPolicy::AllAxes`].
    pub split_policy: SplitPolicy,
    /// Upper bound on region expansions per query. Default: 10 000 000.
    ///
    /// Typical inputs converge after a few thousand expansions because the
    /// overlap count drops sharply with depth; the cap guards against
    /// adversarial inputs that keep many regions tied at the top count.
    pub max_expansions: u64,
    /// Upper bound on regions queued at once. Default: 2 000 000.
    ///
    /// Bounds memory: a queued region costs about 80 bytes, so the default
    /// keeps the frontier near 160 MB before heap growth.
    pub max_frontier: usize,
}

impl SearchConfig {
    /// Default expansion cap.
    pub const DEFAULT_MAX_EXPANSIONS: u64 = 10_000_000;

    /// Default frontier cap.
    pub const DEFAULT_MAX_FRONTIER: usize = 2_000_000;

    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_expansions == 0 {
            return Err(ConfigError::ZeroExpansionLimit);
        }
        if self.max_frontier == 0 {
            return Err(ConfigError::ZeroFrontierLimit);
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            split_policy: SplitPolicy::AllAxes,
            max_expansions: Self::DEFAULT_MAX_EXPANSIONS,
            max_frontier: Self::DEFAULT_MAX_FRONTIER,
        }
    }
}
