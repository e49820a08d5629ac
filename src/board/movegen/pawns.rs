use super::super::{Color, Coord, ReachSet};

/// Squares a pawn of `color` can advance to from `origin`.
///
/// One step forward when it stays on the board, plus a second step from the
/// color's starting row. No capture squares.
#[must_use]
pub fn pawn_reach(size: usize, origin: Coord, color: Color) -> ReachSet {
    let mut reach = ReachSet::new();
    let dir = color.pawn_direction();

    let Some(single) = origin.offset(dir, 0, size) else {
        return reach;
    };
    reach.insert(single);

    if origin.row() == color.pawn_start_row() {
        reach.insert_in_bounds(origin.offset(2 * dir, 0, size));
    }
    reach
}
