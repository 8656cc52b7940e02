//! Number formatting for OBJ records.

use std::fmt;

/// Shortest round-trip form of a coordinate, e.g. `0.5`, `-1`, `12.25`.
///
/// Negative zero prints as `0`.
pub(crate) struct Coord(pub f64);

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 + 0.0)
    }
}

/// Fixed six-decimal form, e.g. `0.500000`.
///
/// Negative zero prints as `0.000000`.
pub(crate) struct Fixed6(pub f64);

impl fmt::Display for Fixed6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0 + 0.0)
    }
}
