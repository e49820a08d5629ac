//! Piece catalog: stable piece identities and cell symbols.
//!
//! Rules never look at how a cell is stored; they go through
//! [`Cell::piece`] and the id table here.

use super::{Cell, Piece};

/// Catalog identity of each piece, in `Piece::ALL` order.
const PIECE_IDS: [(Piece, u8); 6] = [
    (Piece::Pawn, 1),
    (Piece::Rook, 2),
    (Piece::Knight, 3),
    (Piece::Bishop, 4),
    (Piece::Queen, 5),
    (Piece::King, 6),
];

/// Display symbol for each piece id
const PIECE_SYMBOLS: [(Piece, char); 6] = [
    (Piece::Pawn, '1'),
    (Piece::Rook, '2'),
    (Piece::Knight, '3'),
    (Piece::Bishop, '4'),
    (Piece::Queen, '5'),
    (Piece::King, '6'),
];

pub(crate) const EMPTY_SYMBOL: char = '*';
pub(crate) const MARKED_SYMBOL: char = '-';

impl Piece {
    /// Stable small-integer identity (Pawn=1 .. King=6)
    #[must_use]
    pub fn id(self) -> u8 {
        PIECE_IDS
            .iter()
            .find(|(p, _)| *p == self)
            .map_or(0, |&(_, id)| id)
    }

    /// Inverse of [`Piece::id`]
    #[must_use]
    pub fn from_id(id: u8) -> Option<Piece> {
        PIECE_IDS
            .iter()
            .find(|&&(_, pid)| pid == id)
            .map(|&(p, _)| p)
    }

    /// Board symbol, the decimal digit of the piece id
    #[must_use]
    pub fn symbol(self) -> char {
        PIECE_SYMBOLS
            .iter()
            .find(|(p, _)| *p == self)
            .map_or(EMPTY_SYMBOL, |&(_, c)| c)
    }
}

impl Cell {
    /// The piece stored in this cell, or `None` for empty and marked cells.
    #[inline]
    #[must_use]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Cell::Occupied(piece) => Some(piece),
            Cell::Empty | Cell::Marked => None,
        }
    }

    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => EMPTY_SYMBOL,
            Cell::Occupied(piece) => piece.symbol(),
            Cell::Marked => MARKED_SYMBOL,
        }
    }

    /// Inverse of [`Cell::symbol`]
    #[must_use]
    pub fn from_symbol(c: char) -> Option<Cell> {
        match c {
            EMPTY_SYMBOL => Some(Cell::Empty),
            MARKED_SYMBOL => Some(Cell::Marked),
            _ => PIECE_SYMBOLS
                .iter()
                .find(|&&(_, s)| s == c)
                .map(|&(p, _)| Cell::Occupied(p)),
        }
    }
}
