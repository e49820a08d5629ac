use super::super::attack_tables::KING_OFFSETS;
use super::super::{Coord, ReachSet};
use super::leaper_reach;

/// One-square king steps from `origin` that stay on the board.
#[must_use]
pub fn king_reach(size: usize, origin: Coord) -> ReachSet {
    leaper_reach(size, origin, &KING_OFFSETS)
}
