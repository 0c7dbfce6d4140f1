//! **gridpath-core** — geometry types shared by the gridpath crates.
//!
//! Provides [`Pos`], a `(row, col)` cell coordinate, and [`Range`], a
//! half-open rectangle with row-major iteration and flat indexing.

pub mod geom;

pub use geom::{Pos, Range, RangeIter};
