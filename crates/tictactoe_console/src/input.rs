//! Parsing of typed move positions.

use tracing::{instrument, trace};

/// Parses a typed position.
///
/// Anything that is not a signed integer (empty input, letters, a number
/// too large for `i64`) becomes `0`, a position no board accepts, so bad
/// input takes the same path as an out-of-range move.
#[instrument]
pub fn parse_position(text: &str) -> i64 {
    text.trim().parse().unwrap_or_else(|_| {
        trace!("Unparsable position coerced to 0");
        0
    })
}
