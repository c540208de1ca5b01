//! Test utilities for Lodestar development.
//!
//! Provides the reference range lists used across the workspace tests,
//! a brute-force oracle that scores every point of a small region, and a
//! seeded generator for random range sets.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    brute_force, coverage_sample, localization_sample, random_ranges, BruteForce,
    COVERAGE_SAMPLE, LOCALIZATION_SAMPLE,
};
