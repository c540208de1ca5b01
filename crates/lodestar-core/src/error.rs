//! Error types for localization queries.
//!
//! Every variant is fatal to the query that produced it: the computation
//! is pure and deterministic, so a failure is a precondition violation
//! and there is nothing to retry.

use std::error::Error;
use std::fmt;

/// Errors returned by a localization or coverage query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LocateError {
    /// No ranges were supplied, so the maximum is undefined.
    EmptyInput,
    /// A range has a negative radius.
    MalformedRange {
        /// Position of the offending range in the input.
        index: usize,
        /// The rejected radius.
        radius: i64,
    },
    /// Region volume or coordinate arithmetic exceeded the integer width
    /// used for it.
    ArithmeticOverflow {
        /// Which computation overflowed.
        context: &'static str,
    },
    /// The search expanded more regions than its configured cap allows.
    ExpansionLimit {
        /// The configured cap.
        limit: u64,
    },
    /// The search queued more regions at once than its configured cap allows.
    FrontierLimit {
        /// The configured cap.
        limit: usize,
    },
}

impl fmt::Display for LocateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "no ranges given"),
            Self::MalformedRange { index, radius } => {
                write!(f, "range {index} has negative radius {radius}")
            }
            Self::ArithmeticOverflow { context } => {
                write!(f, "arithmetic overflow computing {context}")
            }
            Self::ExpansionLimit { limit } => {
                write!(f, "search exceeded {limit} region expansions")
            }
            Self::FrontierLimit { limit } => {
                write!(f, "search frontier exceeded {limit} queued regions")
            }
        }
    }
}

impl Error for LocateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_offending_range() {
        let err = LocateError::MalformedRange {
            index: 3,
            radius: -2,
        };
        let msg = err.to_string();
        assert!(msg.contains("range 3"));
        assert!(msg.contains("-2"));
    }

    #[test]
    fn display_names_overflow_context() {
        let err = LocateError::ArithmeticOverflow {
            context: "region volume",
        };
        assert_eq!(err.to_string(), "arithmetic overflow computing region volume");
    }

    #[test]
    fn display_expansion_limit() {
        let err = LocateError::ExpansionLimit { limit: 10 };
        assert!(err.to_string().contains("10 region expansions"));
    }

    #[test]
    fn display_frontier_limit() {
        let err = LocateError::FrontierLimit { limit: 64 };
        assert_eq!(err.to_string(), "search frontier exceeded 64 queued regions");
    }
}
