//! Text rendering of boards.
//!
//! Every cell prints as its symbol followed by a space, with a line break
//! after each row: `*` empty, the piece id digit for pieces, `-` marked.

use std::fmt;

use super::catalog::MARKED_SYMBOL;
use super::{Board, Cell, Coord, Overlay};

fn write_grid<F>(f: &mut impl fmt::Write, size: usize, cells: &[Cell], symbol: F) -> fmt::Result
where
    F: Fn(usize, Cell) -> char,
{
    for (idx, &cell) in cells.iter().enumerate() {
        write!(f, "{} ", symbol(idx, cell))?;
        if (idx + 1) % size == 0 {
            writeln!(f)?;
        }
    }
    Ok(())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self.size, &self.cells, |_, cell| cell.symbol())
    }
}

impl Board {
    /// Render the board with `overlay` squares shown as markers.
    ///
    /// Pieces stay visible even when the overlay covers their square.
    #[must_use]
    pub fn render_with(&self, overlay: &Overlay) -> String {
        debug_assert_eq!(self.size, overlay.size());
        let mut out = String::with_capacity(self.cells.len() * 2 + self.size);
        let size = self.size;
        // Writing into a String cannot fail.
        let _ = write_grid(&mut out, size, &self.cells, |idx, cell| match cell {
            Cell::Occupied(_) => cell.symbol(),
            _ if overlay.is_marked(Coord::from_index(idx, size)) => MARKED_SYMBOL,
            _ => cell.symbol(),
        });
        out
    }
}
