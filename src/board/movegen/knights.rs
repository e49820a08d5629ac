use super::super::attack_tables::KNIGHT_OFFSETS;
use super::super::{Coord, ReachSet};
use super::leaper_reach;

/// Knight jumps from `origin` that land on the board.
#[must_use]
pub fn knight_reach(size: usize, origin: Coord) -> ReachSet {
    leaper_reach(size, origin, &KNIGHT_OFFSETS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: usize, col: usize) -> Coord {
        Coord::new(row, col, 8).unwrap()
    }

    #[test]
    fn test_corner() {
        assert_eq!(knight_reach(8, c(0, 0)).to_pairs(), vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn test_center_has_eight() {
        assert_eq!(knight_reach(8, c(4, 4)).len(), 8);
    }

    #[test]
    fn test_edge_counts() {
        assert_eq!(knight_reach(8, c(0, 1)).len(), 3);
        assert_eq!(knight_reach(8, c(0, 3)).len(), 4);
        assert_eq!(knight_reach(8, c(1, 3)).len(), 6);
    }

    #[test]
    fn test_tiny_board_has_nowhere_to_jump() {
        let origin = Coord::new(0, 0, 2).unwrap();
        assert!(knight_reach(2, origin).is_empty());
    }
}
