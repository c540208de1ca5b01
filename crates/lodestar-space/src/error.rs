//! Error types for range and region construction.

use std::error::Error;
use std::fmt;

/// Errors arising from range validation, region construction, or parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// A range was declared with a negative radius.
    NegativeRadius {
        /// The rejected radius.
        radius: i64,
    },
    /// A region's corners are not ordered `low <= high` on every axis.
    InvalidRegion {
        /// What went wrong.
        reason: String,
    },
    /// A region's lattice-point count does not fit in `u128`.
    VolumeOverflow,
    /// A range line does not match `pos=<x,y,z>, r=N`.
    Syntax {
        /// What went wrong.
        reason: String,
    },
    /// An error on a specific line of a multi-line input.
    AtLine {
        /// 1-based line number.
        line: usize,
        /// The underlying error.
        error: Box<SpaceError>,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeRadius { radius } => {
                write!(f, "radius must be non-negative, got {radius}")
            }
            Self::InvalidRegion { reason } => write!(f, "invalid region: {reason}"),
            Self::VolumeOverflow => write!(f, "region volume exceeds u128"),
            Self::Syntax { reason } => write!(f, "syntax error: {reason}"),
            Self::AtLine { line, error } => write!(f, "line {line}: {error}"),
        }
    }
}

impl Error for SpaceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AtLine { error, .. } => Some(error.as_ref()),
            _ => None,
        }
    }
}
