//! Cell contents.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;

/// What a single board cell holds.
///
/// Color is not stored; the caller tracks it alongside the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
    /// Reachable-square marker written by move generation
    Marked,
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    #[must_use]
    pub const fn is_marked(self) -> bool {
        matches!(self, Cell::Marked)
    }
}

impl From<Piece> for Cell {
    fn from(piece: Piece) -> Self {
        Cell::Occupied(piece)
    }
}
