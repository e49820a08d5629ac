//! Board representation and piece reachability.
//!
//! A [`Board`] is an N×N grid of [`Cell`]s. Placing a piece and calling
//! [`Board::generate`] marks every square the piece could move to under its
//! raw movement pattern. Occupancy, check and special moves are ignored.
//!
//! # Example
//! ```
//! use piece_reach::board::{Board, Color, Piece};
//!
//! let mut board = Board::standard();
//! let origin = board.place_at(0, 0, Piece::Knight).unwrap();
//! assert_eq!(board.generate(origin, Color::White), 2);
//! ```

mod attack_tables;
mod catalog;
mod error;
mod movegen;
mod overlay;
mod render;
mod shared;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{BoardError, CoordError, InputError, ParseError};
pub use movegen::{
    bishop_reach, king_reach, knight_reach, pawn_reach, queen_reach, reachable, rook_reach,
};
pub use overlay::Overlay;
pub use shared::SharedBoard;
pub use state::{Board, STANDARD_SIZE};
pub use types::{Cell, Color, Coord, Piece, ReachSet};
