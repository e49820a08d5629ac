use log::debug;

use super::{BoardError, Cell, Coord, Piece};

/// Side length of the standard chess board
pub const STANDARD_SIZE: usize = 8;

/// An N×N grid of cells, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) size: usize,
    pub(crate) cells: Vec<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    /// Create an empty `size`×`size` board.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::ZeroSize);
        }
        Ok(Board {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Empty 8×8 board
    #[must_use]
    pub fn standard() -> Self {
        Board {
            size: STANDARD_SIZE,
            cells: vec![Cell::Empty; STANDARD_SIZE * STANDARD_SIZE],
        }
    }

    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Reset every cell to `Empty`.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    #[inline]
    #[must_use]
    pub fn get(&self, coord: Coord) -> Cell {
        debug_assert!(self.contains(coord), "{coord} outside {0}x{0} board", self.size);
        self.cells[coord.index(self.size)]
    }

    #[inline]
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        debug_assert!(self.contains(coord), "{coord} outside {0}x{0} board", self.size);
        let idx = coord.index(self.size);
        self.cells[idx] = cell;
    }

    /// The piece on `coord`, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        self.get(coord).piece()
    }

    /// Put `piece` on `coord`, overwriting the cell.
    pub fn place(&mut self, coord: Coord, piece: Piece) {
        debug!("placing {piece} at {coord}");
        self.set(coord, Cell::Occupied(piece));
    }

    /// Validate raw coordinates and place `piece` there.
    pub fn place_at(&mut self, row: usize, col: usize, piece: Piece) -> Result<Coord, BoardError> {
        let coord = Coord::try_new(row, col, self.size)?;
        self.place(coord, piece);
        Ok(coord)
    }

    /// Bounds-checked coordinate for this board
    #[must_use]
    pub fn coord(&self, row: usize, col: usize) -> Option<Coord> {
        Coord::new(row, col, self.size)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row() < self.size && coord.col() < self.size
    }

    /// Flattened cells in row-major order
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Coordinates of every `Marked` cell, row-major
    pub fn marked(&self) -> impl Iterator<Item = Coord> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_marked())
            .map(move |(idx, _)| Coord::from_index(idx, size))
    }

    /// Remove every marker, leaving pieces in place.
    pub fn clear_marks(&mut self) {
        for cell in &mut self.cells {
            if cell.is_marked() {
                *cell = Cell::Empty;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(5).unwrap();
        assert_eq!(board.size(), 5);
        assert_eq!(board.cells().len(), 25);
        assert!(board.cells().iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(Board::new(0), Err(BoardError::ZeroSize));
    }

    #[test]
    fn test_set_get_clear() {
        let mut board = Board::standard();
        let c = board.coord(2, 3).unwrap();
        board.set(c, Cell::Marked);
        assert_eq!(board.get(c), Cell::Marked);
        board.place(c, Piece::Rook);
        assert_eq!(board.piece_at(c), Some(Piece::Rook));
        board.clear();
        assert_eq!(board.get(c), Cell::Empty);
    }

    #[test]
    fn test_place_at_validates() {
        let mut board = Board::standard();
        assert!(board.place_at(7, 7, Piece::King).is_ok());
        assert!(matches!(
            board.place_at(8, 0, Piece::King),
            Err(BoardError::Coord(_))
        ));
    }

    #[test]
    fn test_cells_are_row_major() {
        let mut board = Board::new(3).unwrap();
        board.place_at(1, 2, Piece::Queen).unwrap();
        assert_eq!(board.cells()[5], Cell::Occupied(Piece::Queen));
    }

    #[test]
    fn test_marked_and_clear_marks() {
        let mut board = Board::new(3).unwrap();
        let origin = board.place_at(0, 0, Piece::Pawn).unwrap();
        board.set(board.coord(2, 2).unwrap(), Cell::Marked);
        board.set(board.coord(0, 1).unwrap(), Cell::Marked);
        let marked: Vec<_> = board.marked().map(|c| (c.row(), c.col())).collect();
        assert_eq!(marked, vec![(0, 1), (2, 2)]);
        board.clear_marks();
        assert_eq!(board.marked().count(), 0);
        assert_eq!(board.piece_at(origin), Some(Piece::Pawn));
    }
}
