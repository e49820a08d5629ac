use super::super::attack_tables::{DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};
use super::super::{Coord, ReachSet};

/// Type of sliding piece
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    /// True for rook and queen rays along ranks and files
    #[inline]
    const fn moves_straight(self) -> bool {
        matches!(self, SliderType::Rook | SliderType::Queen)
    }

    /// True for bishop and queen rays along diagonals
    #[inline]
    const fn moves_diagonally(self) -> bool {
        matches!(self, SliderType::Bishop | SliderType::Queen)
    }
}

/// Walk every ray of `slider` to the board edge. Occupancy is ignored.
pub(crate) fn slider_reach(size: usize, origin: Coord, slider: SliderType) -> ReachSet {
    let straight: &[(isize, isize)] = if slider.moves_straight() {
        &ORTHOGONAL_DIRECTIONS
    } else {
        &[]
    };
    let diagonal: &[(isize, isize)] = if slider.moves_diagonally() {
        &DIAGONAL_DIRECTIONS
    } else {
        &[]
    };

    let mut reach = ReachSet::new();
    for &(dr, dc) in straight.iter().chain(diagonal) {
        let mut cur = origin;
        while let Some(next) = cur.offset(dr, dc, size) {
            reach.insert(next);
            cur = next;
        }
    }
    reach
}

/// Every square sharing a row or column with `origin`.
#[must_use]
pub fn rook_reach(size: usize, origin: Coord) -> ReachSet {
    slider_reach(size, origin, SliderType::Rook)
}

/// Every square on either diagonal through `origin`.
#[must_use]
pub fn bishop_reach(size: usize, origin: Coord) -> ReachSet {
    slider_reach(size, origin, SliderType::Bishop)
}

/// Union of the rook and bishop patterns.
#[must_use]
pub fn queen_reach(size: usize, origin: Coord) -> ReachSet {
    slider_reach(size, origin, SliderType::Queen)
}
