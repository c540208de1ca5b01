//! Core types for the Lodestar localization engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the lattice coordinate [`Point3`] and the query error type
//! [`LocateError`] shared by the rest of the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod point;

pub use error::LocateError;
pub use point::Point3;
