//! Geometry primitives: [`Pos`] and [`Range`].
//!
//! Coordinates are `(row, col)` pairs. Rows grow downward and columns grow
//! to the right, the same way a grid of text lines reads.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A cell coordinate in a character grid.
///
/// Fields are signed so that a neighbour offset may step outside the grid
/// and be rejected by [`Range::contains`] afterwards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four axis-aligned neighbours in search order: down, up, right, left.
    #[inline]
    pub fn neighbors_4(self) -> [Pos; 4] {
        [
            self.shift(1, 0),
            self.shift(-1, 0),
            self.shift(0, 1),
            self.shift(0, -1),
        ]
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    /// Row-major order.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl From<(i32, i32)> for Pos {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Pos> for (i32, i32) {
    #[inline]
    fn from(p: Pos) -> Self {
        (p.row, p.col)
    }
}

impl From<(usize, usize)> for Pos {
    #[inline]
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row as i32, col as i32)
    }
}

impl Add for Pos {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Pos {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
///
/// All empty ranges are considered equal.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Pos,
    pub max: Pos,
}

impl PartialEq for Range {
    fn eq(&self, other: &Self) -> bool {
        (self.min == other.min && self.max == other.max) || (self.is_empty() && other.is_empty())
    }
}

impl Eq for Range {}

impl Range {
    /// Create a new range from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(row0: i32, col0: i32, row1: i32, col1: i32) -> Self {
        Self {
            min: Pos::new(row0.min(row1), col0.min(col1)),
            max: Pos::new(row0.max(row1), col0.max(col1)),
        }
    }

    /// The range covering a grid of `rows` × `cols` cells at the origin.
    #[inline]
    pub fn sized(rows: usize, cols: usize) -> Self {
        Self::new(0, 0, rows as i32, cols as i32)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(self) -> i32 {
        self.max.row - self.min.row
    }

    /// Number of columns.
    #[inline]
    pub fn cols(self) -> i32 {
        self.max.col - self.min.col
    }

    /// Total number of cells in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows() as usize) * (self.cols() as usize)
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.row >= self.max.row || self.min.col >= self.max.col
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Pos) -> bool {
        p.row >= self.min.row && p.row < self.max.row && p.col >= self.min.col && p.col < self.max.col
    }

    /// Flat row-major index of `p`, or `None` outside the range.
    #[inline]
    pub fn index(self, p: Pos) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        let row = (p.row - self.min.row) as usize;
        let col = (p.col - self.min.col) as usize;
        Some(row * self.cols() as usize + col)
    }

    /// Inverse of [`index`](Self::index). `idx` must be below [`len`](Self::len).
    #[inline]
    pub fn pos(self, idx: usize) -> Pos {
        let cols = self.cols().max(1) as usize;
        Pos::new(
            (idx / cols) as i32 + self.min.row,
            (idx % cols) as i32 + self.min.col,
        )
    }

    /// Row-major iterator over every position in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Pos;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[({})-({}))", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the positions in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Pos,
}

impl Iterator for RangeIter {
    type Item = Pos;

    #[inline]
    fn next(&mut self) -> Option<Pos> {
        if self.cur.row >= self.range.max.row || self.range.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.range.max.col {
            self.cur.col = self.range.min.col;
            self.cur.row += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.row >= self.range.max.row {
            return (0, Some(0));
        }
        let w = self.range.cols() as usize;
        let remaining_in_row = (self.range.max.col - self.cur.col) as usize;
        let remaining_rows = (self.range.max.row - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RangeIter {}
