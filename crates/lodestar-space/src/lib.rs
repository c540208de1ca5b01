//! Sensor ranges and lattice regions for the Lodestar localization engine.
//!
//! This crate defines the two geometric building blocks of the search:
//!
//! - [`Range`]: a Manhattan ball around a lattice center, with an exact
//!   O(1) test for whether it reaches any point of a [`Region`].
//! - [`Region`]: an axis-aligned cuboid of lattice points, with checked
//!   volume and a [`split`](Region::split) step that partitions it under a
//!   [`SplitPolicy`].
//!
//! Range lists in the `pos=<x,y,z>, r=N` text format are read with
//! [`parse_ranges`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod parse;
pub mod range;
pub mod region;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::SpaceError;
pub use parse::parse_ranges;
pub use range::Range;
pub use region::{Children, Region, SplitPolicy};
