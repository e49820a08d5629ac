//! Core board types.
//!
//! - `Piece` and `Color` - piece kinds and colors
//! - `Coord` - bounds-checked (row, col) position
//! - `Cell` - contents of a single board cell
//! - `ReachSet` - ordered set of reachable destinations

mod cell;
mod coord;
mod piece;
mod reach;

pub use cell::Cell;
pub use coord::Coord;
pub use piece::{Color, Piece};
pub use reach::ReachSet;
