use gridpath_core::Pos;

use crate::config::Marker;

/// Reasons a shortest path could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The grid has no cell holding this marker.
    #[error("grid has no {0}")]
    MissingEndpoint(Marker),

    /// Both endpoints exist but no sequence of open cells connects them.
    #[error("no path from {start} to {target}")]
    Unreachable { start: Pos, target: Pos },

    /// A row's length differs from the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    MalformedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A marker appeared twice under [`MarkerPolicy::Unique`](crate::MarkerPolicy::Unique).
    #[error("{marker} appears at both {first} and {second}")]
    DuplicateMarker {
        marker: Marker,
        first: Pos,
        second: Pos,
    },
}
