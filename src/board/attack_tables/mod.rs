//! Offset and direction tables for the reachability rules.
//!
//! Leapers (knight, king) apply each offset once; sliders (rook, bishop,
//! queen) walk each direction until they leave the board.

mod tables;

pub(crate) use tables::{DIAGONAL_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONAL_DIRECTIONS};
