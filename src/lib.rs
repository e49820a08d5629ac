pub mod board;
pub mod input;
pub mod options;

pub use board::{Board, Cell, Color, Coord, Overlay, Piece, ReachSet};
pub use options::{Placement, SessionOptions};
