//! Best-first branch-and-bound localization over sensor ranges.
//!
//! Given a set of [`Range`](lodestar_space::Range)s, [`localize`] finds the
//! lattice point contained in the most ranges, nearest the origin on ties,
//! without enumerating lattice points. [`Localizer`] runs the same query
//! under a custom [`SearchConfig`] and also returns [`SearchStats`];
//! [`Localizer::run`] keeps those stats on failure too, in a
//! [`SearchError`].
//!
//! [`strongest_coverage`] answers the companion query: how many range
//! centers the range with the largest radius reaches.
//!
//! All queries are sequential and pure. Diagnostics are emitted through
//! `tracing` at `debug` (seed and result) and `trace` (per expansion).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod coverage;
pub mod driver;
pub mod frontier;
pub mod metrics;
pub mod select;

pub use config::{ConfigError, SearchConfig};
pub use coverage::{strongest_coverage, Coverage};
pub use driver::{localize, Localization, Localizer, SearchError};
pub use frontier::{Frontier, SearchNode};
pub use metrics::SearchStats;
pub use select::{Candidate, Selector};
