//! Board coordinates.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::CoordError;

/// A (row, col) position on an N×N board.
///
/// Coordinates are only built through bounds-checked constructors, so a
/// `Coord` is always valid for the board size it was created against.
/// Ordering is row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// Create a coordinate if both components lie in `0..size`.
    #[must_use]
    pub fn new(row: usize, col: usize, size: usize) -> Option<Self> {
        if row < size && col < size {
            Some(Coord { row, col })
        } else {
            None
        }
    }

    /// Like [`Coord::new`] but reports which component was out of range.
    pub fn try_new(row: usize, col: usize, size: usize) -> Result<Self, CoordError> {
        if row >= size {
            return Err(CoordError::RowOutOfBounds { row, size });
        }
        if col >= size {
            return Err(CoordError::ColOutOfBounds { col, size });
        }
        Ok(Coord { row, col })
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Step by `(dr, dc)`, returning `None` when the target leaves the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize, size: usize) -> Option<Self> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Coord::new(row, col, size)
    }

    /// Row-major index into a flattened `size * size` grid
    #[inline]
    #[must_use]
    pub const fn index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: usize, size: usize) -> Self {
        Coord {
            row: idx / size,
            col: idx % size,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
