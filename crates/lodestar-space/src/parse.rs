//! Text format for range lists: one `pos=<x,y,z>, r=N` per line.

use crate::error::SpaceError;
use crate::range::Range;
use lodestar_core::Point3;
use std::str::FromStr;

impl FromStr for Range {
    type Err = SpaceError;

    /// Parse a single `pos=<x,y,z>, r=N` line.
    ///
    /// Whitespace around tokens is ignored. A negative radius is rejected
    /// here so that parsed ranges are always valid.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .trim()
            .strip_prefix("pos=<")
            .ok_or_else(|| syntax("expected `pos=<`"))?;
        let (coords, rest) = rest
            .split_once('>')
            .ok_or_else(|| syntax("missing `>` after coordinates"))?;

        let mut axes = [0i64; 3];
        let mut parts = coords.split(',');
        for (axis, slot) in axes.iter_mut().enumerate() {
            let part = parts
                .next()
                .ok_or_else(|| syntax(format!("expected 3 coordinates, got {axis}")))?;
            *slot = parse_int(part, "coordinate")?;
        }
        if parts.next().is_some() {
            return Err(syntax("expected 3 coordinates, got more"));
        }

        let radius = rest
            .trim_start()
            .strip_prefix(',')
            .map(str::trim_start)
            .and_then(|r| r.strip_prefix("r="))
            .ok_or_else(|| syntax("expected `, r=` after coordinates"))?;
        let radius = parse_int(radius, "radius")?;

        let range = Range::new(Point3::from_axes(axes), radius);
        range.validate()?;
        Ok(range)
    }
}

/// Parse a whole range list, skipping blank lines.
///
/// Errors are wrapped in [`SpaceError::AtLine`] with the 1-based line number.
pub fn parse_ranges(text: &str) -> Result<Vec<Range>, SpaceError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            line.parse::<Range>().map_err(|error| SpaceError::AtLine {
                line: i + 1,
                error: Box::new(error),
            })
        })
        .collect()
}

fn parse_int(token: &str, what: &str) -> Result<i64, SpaceError> {
    let token = token.trim();
    token
        .parse::<i64>()
        .map_err(|e| syntax(format!("invalid {what} `{token}`: {e}")))
}

fn syntax(reason: impl Into<String>) -> SpaceError {
    SpaceError::Syntax {
        reason: reason.into(),
    }
}
