//! Reachability rules and the move generator that applies them.
//!
//! Each rule is a pure function of board size, origin and (for pawns)
//! color. Rules never read cell contents, so pieces do not block each
//! other and captures are not modelled.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub use kings::king_reach;
pub use knights::knight_reach;
pub use pawns::pawn_reach;
pub use sliders::{bishop_reach, queen_reach, rook_reach};

use log::{debug, trace};

use super::{Board, Cell, Color, Coord, Overlay, Piece, ReachSet};

/// Apply each offset once, keeping targets that stay on the board.
pub(crate) fn leaper_reach(size: usize, origin: Coord, offsets: &[(isize, isize)]) -> ReachSet {
    let mut reach = ReachSet::new();
    for &(dr, dc) in offsets {
        reach.insert_in_bounds(origin.offset(dr, dc, size));
    }
    reach
}

/// Destinations for `piece` standing on `origin`. `color` only matters for
/// pawns.
#[must_use]
pub fn reachable(piece: Piece, size: usize, origin: Coord, color: Color) -> ReachSet {
    match piece {
        Piece::Pawn => pawn_reach(size, origin, color),
        Piece::Rook => rook_reach(size, origin),
        Piece::Knight => knight_reach(size, origin),
        Piece::Bishop => bishop_reach(size, origin),
        Piece::Queen => queen_reach(size, origin),
        Piece::King => king_reach(size, origin),
    }
}

impl Board {
    /// Destinations of the piece on `origin` without touching the board.
    ///
    /// Empty and marked origins yield an empty set.
    #[must_use]
    pub fn reachable(&self, origin: Coord, color: Color) -> ReachSet {
        match self.piece_at(origin) {
            Some(piece) => reachable(piece, self.size, origin, color),
            None => ReachSet::new(),
        }
    }

    /// Mark every square reachable by the piece on `origin`.
    ///
    /// Markers overwrite whatever the destination held, pieces included.
    /// An empty or marked origin is a no-op. Returns the number of
    /// destinations marked.
    pub fn generate(&mut self, origin: Coord, color: Color) -> usize {
        let Some(piece) = self.piece_at(origin) else {
            trace!("no piece at {origin}, nothing to generate");
            return 0;
        };

        let reach = reachable(piece, self.size, origin, color);
        debug!(
            "{color} {piece} at {origin} reaches {} squares on {}x{} board",
            reach.len(),
            self.size,
            self.size
        );
        for &coord in &reach {
            self.set(coord, Cell::Marked);
        }
        reach.len()
    }

    /// Reachable squares of the piece on `origin` as a separate overlay,
    /// leaving the board's occupancy intact.
    #[must_use]
    pub fn overlay(&self, origin: Coord, color: Color) -> Overlay {
        let mut overlay = Overlay::new(self.size);
        overlay.extend(&self.reachable(origin, color));
        overlay
    }
}
