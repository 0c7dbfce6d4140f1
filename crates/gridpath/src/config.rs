//! Parser configuration: which characters mean what, and how repeated
//! endpoint markers are treated.

use std::fmt;

/// One of the two endpoint markers of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Marker {
    Start,
    Target,
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start 'S'"),
            Self::Target => write!(f, "target 'T'"),
        }
    }
}

/// Character legend of a grid.
///
/// Only `wall` blocks movement. Every other character, including ones not
/// listed here, is an open cell. `floor` matters only for counting open
/// floor cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Legend {
    pub wall: char,
    pub floor: char,
    pub start: char,
    pub target: char,
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            wall: '#',
            floor: '.',
            start: 'S',
            target: 'T',
        }
    }
}

impl Legend {
    /// Whether `ch` blocks movement.
    #[inline]
    pub fn is_wall(&self, ch: char) -> bool {
        ch == self.wall
    }

    /// The marker `ch` stands for, if any.
    #[inline]
    pub fn marker(&self, ch: char) -> Option<Marker> {
        if ch == self.start {
            Some(Marker::Start)
        } else if ch == self.target {
            Some(Marker::Target)
        } else {
            None
        }
    }
}

/// What to do when a marker occurs more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MarkerPolicy {
    /// The occurrence seen last in row-major order is used.
    #[default]
    LastWins,
    /// A second occurrence is a [`DuplicateMarker`](crate::PathError::DuplicateMarker) error.
    Unique,
}

/// Settings for [`parse_with`](crate::parse_with) and
/// [`find_path_with`](crate::find_path_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParserConfig {
    pub legend: Legend,
    pub markers: MarkerPolicy,
}
