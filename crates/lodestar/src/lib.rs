//! Lodestar: exact localization of the lattice point covered by the most
//! Manhattan sensor ranges.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Lodestar sub-crates. For most users, adding `lodestar` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use lodestar::prelude::*;
//!
//! let ranges = parse_ranges(
//!     "pos=<10,12,12>, r=2
//!      pos=<12,14,12>, r=2
//!      pos=<16,12,12>, r=4
//!      pos=<14,14,14>, r=6
//!      pos=<50,50,50>, r=200
//!      pos=<10,10,10>, r=5",
//! )
//! .unwrap();
//!
//! let loc = localize(&ranges).unwrap();
//! assert_eq!(loc.point, Point3::new(12, 12, 12));
//! assert_eq!(loc.overlap_count, 5);
//! assert_eq!(loc.distance_to_origin, 36);
//!
//! let cov = strongest_coverage(&ranges).unwrap();
//! assert_eq!(cov.strongest, 4);
//! assert_eq!(cov.in_range, 6);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `lodestar-core` | `Point3`, `LocateError` |
//! | [`space`] | `lodestar-space` | Ranges, regions, split policies, parsing |
//! | [`search`] | `lodestar-search` | The localizer, its config and stats |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`lodestar-core`).
///
/// The lattice coordinate [`types::Point3`] and the query error
/// [`types::LocateError`].
pub use lodestar_core as types;

/// Ranges and regions (`lodestar-space`).
///
/// Provides [`space::Range`], [`space::Region`] with its
/// [`space::SplitPolicy`], and [`space::parse_ranges`].
pub use lodestar_space as space;

/// The search (`lodestar-search`).
///
/// [`search::Localizer`] runs queries under a [`search::SearchConfig`] and
/// reports [`search::SearchStats`]; [`search::localize`] and
/// [`search::strongest_coverage`] are the one-call entry points.
pub use lodestar_search as search;

/// Common imports for typical Lodestar usage.
///
/// ```rust
/// use lodestar::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use lodestar_core::{LocateError, Point3};

    // Space
    pub use lodestar_space::{parse_ranges, Range, Region, SpaceError, SplitPolicy};

    // Search
    pub use lodestar_search::{
        localize, strongest_coverage, ConfigError, Coverage, Localization, Localizer,
        SearchConfig, SearchError, SearchStats,
    };
}
