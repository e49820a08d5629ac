//! Error types for board setup, parsing and coordinate input.
//!
//! Move generation itself never fails; these only arise at the boundary
//! where coordinates, sizes and names enter the crate.

use std::fmt;
use std::io;

/// Error type for out-of-range coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    /// Row outside `0..size`
    RowOutOfBounds { row: usize, size: usize },
    /// Column outside `0..size`
    ColOutOfBounds { col: usize, size: usize },
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::RowOutOfBounds { row, size } => {
                write!(f, "Row {row} out of bounds (must be 0-{})", size.saturating_sub(1))
            }
            CoordError::ColOutOfBounds { col, size } => {
                write!(f, "Column {col} out of bounds (must be 0-{})", size.saturating_sub(1))
            }
        }
    }
}

impl std::error::Error for CoordError {}

/// Error type for board construction and placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A board needs at least one cell
    ZeroSize,
    /// Placement coordinate rejected
    Coord(CoordError),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::ZeroSize => write!(f, "Board size must be at least 1"),
            BoardError::Coord(err) => write!(f, "Invalid placement: {err}"),
        }
    }
}

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoardError::Coord(err) => Some(err),
            BoardError::ZeroSize => None,
        }
    }
}

impl From<CoordError> for BoardError {
    fn from(err: CoordError) -> Self {
        BoardError::Coord(err)
    }
}

/// Error type for piece and color name parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnknownPiece { found: String },
    UnknownColor { found: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownPiece { found } => {
                write!(
                    f,
                    "Unknown piece '{found}', expected pawn, rook, knight, bishop, queen or king"
                )
            }
            ParseError::UnknownColor { found } => {
                write!(f, "Unknown color '{found}', expected 'white' or 'black'")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Error type for interactive coordinate input
#[derive(Debug)]
pub enum InputError {
    /// Reading the prompt answer or writing the prompt failed
    Io(io::Error),
    /// Input ended before a valid coordinate was entered
    Exhausted,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Io(err) => write!(f, "I/O error while reading coordinates: {err}"),
            InputError::Exhausted => write!(f, "Input ended before a valid position was entered"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io(err) => Some(err),
            InputError::Exhausted => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        InputError::Io(err)
    }
}
