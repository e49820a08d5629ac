//! Session configuration: which piece goes where, and how to show it.

use std::fmt;
use std::io::{BufRead, Write};

use log::info;
use rand::Rng;

use crate::board::{Board, BoardError, Color, Coord, InputError, Overlay, Piece, ReachSet};
use crate::input::{place_with_retry, read_coord};

/// Where the piece is placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Raw coordinates; re-prompted if off the board
    Fixed { row: i64, col: i64 },
    /// Ask for coordinates
    Interactive,
    /// Pick a uniformly random square
    Random,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionOptions {
    pub size: usize,
    pub piece: Piece,
    pub color: Color,
    pub placement: Placement,
    /// Keep occupancy and draw markers from a separate overlay
    pub overlay: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            size: 8,
            piece: Piece::Pawn,
            color: Color::Black,
            placement: Placement::Fixed { row: 1, col: 1 },
            overlay: false,
        }
    }
}

/// Outcome of a session run
#[derive(Clone, Debug)]
pub struct SessionReport {
    pub board: Board,
    pub origin: Coord,
    pub reach: ReachSet,
    pub rendered: String,
}

/// Error type for a session run
#[derive(Debug)]
pub enum SessionError {
    Board(BoardError),
    Input(InputError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Board(err) => write!(f, "{err}"),
            SessionError::Input(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Board(err) => Some(err),
            SessionError::Input(err) => Some(err),
        }
    }
}

impl From<BoardError> for SessionError {
    fn from(err: BoardError) -> Self {
        SessionError::Board(err)
    }
}

impl From<InputError> for SessionError {
    fn from(err: InputError) -> Self {
        SessionError::Input(err)
    }
}

impl SessionOptions {
    /// Build the board, place the piece, and compute its reachable squares.
    pub fn run<R, W, G>(
        &self,
        input: &mut R,
        output: &mut W,
        rng: &mut G,
    ) -> Result<SessionReport, SessionError>
    where
        R: BufRead,
        W: Write,
        G: Rng,
    {
        let mut board = Board::new(self.size)?;

        let origin = match self.placement {
            Placement::Fixed { row, col } => {
                place_with_retry(&mut board, row, col, self.piece, input, output)?
            }
            Placement::Interactive => {
                let coord = read_coord(input, output, self.size)?;
                board.place(coord, self.piece);
                coord
            }
            Placement::Random => {
                let row = rng.gen_range(0..self.size);
                let col = rng.gen_range(0..self.size);
                board.place_at(row, col, self.piece)?
            }
        };
        info!(
            "{} {} at {} on {}x{} board",
            self.color, self.piece, origin, self.size, self.size
        );

        let reach = board.reachable(origin, self.color);
        let rendered = if self.overlay {
            let mut overlay = Overlay::new(self.size);
            overlay.extend(&reach);
            board.render_with(&overlay)
        } else {
            board.generate(origin, self.color);
            board.to_string()
        };

        Ok(SessionReport {
            board,
            origin,
            reach,
            rendered,
        })
    }
}
