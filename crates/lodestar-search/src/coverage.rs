//! Coverage of the strongest range.

use lodestar_core::LocateError;
use lodestar_space::Range;

use crate::driver::check_ranges;

/// How many range centers the strongest range reaches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Coverage {
    /// Index of the range with the largest radius (first one on ties).
    pub strongest: usize,
    /// Number of range centers, its own included, within that range.
    pub in_range: usize,
}

/// Count the range centers inside the range with the largest radius.
///
/// # Errors
///
/// [`LocateError::EmptyInput`] for no ranges, [`LocateError::MalformedRange`]
/// for a negative radius.
pub fn strongest_coverage(ranges: &[Range]) -> Result<Coverage, LocateError> {
    check_ranges(ranges)?;
    // max_by_key keeps the last maximum; reverse so the first one wins.
    let (strongest, range) = ranges
        .iter()
        .enumerate()
        .rev()
        .max_by_key(|(_, r)| r.radius)
        .ok_or(LocateError::EmptyInput)?;
    let in_range = ranges.iter().filter(|r| range.contains(&r.center)).count();
    Ok(Coverage {
        strongest,
        in_range,
    })
}
