//! Property-based tests using proptest.

use crate::board::{
    bishop_reach, king_reach, knight_reach, pawn_reach, queen_reach, reachable, rook_reach, Board,
    Color, Coord, Piece,
};
use proptest::prelude::*;

/// Strategy for a board size and an origin on it
fn board_and_origin(max: usize) -> impl Strategy<Value = (usize, Coord)> {
    (1..=max).prop_flat_map(|size| {
        (0..size, 0..size).prop_map(move |(row, col)| {
            (size, Coord::new(row, col, size).expect("strategy stays in bounds"))
        })
    })
}

fn piece_strategy() -> impl Strategy<Value = Piece> {
    prop::sample::select(Piece::ALL.to_vec())
}

fn color_strategy() -> impl Strategy<Value = Color> {
    prop::sample::select(Color::BOTH.to_vec())
}

/// Distance from `coord` to the nearest edge along each axis.
fn edge_distance(size: usize, coord: Coord) -> (usize, usize) {
    let row = coord.row().min(size - 1 - coord.row());
    let col = coord.col().min(size - 1 - coord.col());
    (row, col)
}

proptest! {
    /// Property: every produced coordinate lies on the board
    #[test]
    fn prop_bounds_closure(
        (size, origin) in board_and_origin(16),
        piece in piece_strategy(),
        color in color_strategy(),
    ) {
        for c in &reachable(piece, size, origin, color) {
            prop_assert!(c.row() < size && c.col() < size, "{} off a {}x{} board", c, size, size);
        }
    }

    /// Property: no rule returns its own origin
    #[test]
    fn prop_origin_excluded(
        (size, origin) in board_and_origin(16),
        piece in piece_strategy(),
        color in color_strategy(),
    ) {
        prop_assert!(!reachable(piece, size, origin, color).contains(origin));
    }

    /// Property: queen = rook ∪ bishop, and the two are disjoint
    #[test]
    fn prop_queen_decomposition((size, origin) in board_and_origin(16)) {
        let rook = rook_reach(size, origin);
        let bishop = bishop_reach(size, origin);
        prop_assert!(rook.is_disjoint(&bishop));
        prop_assert_eq!(queen_reach(size, origin), rook.union(&bishop));
    }

    /// Property: rook always has 2(N-1) destinations
    #[test]
    fn prop_rook_completeness((size, origin) in board_and_origin(16)) {
        prop_assert_eq!(rook_reach(size, origin).len(), 2 * (size - 1));
    }

    /// Property: knight counts depend only on distance to the edges
    #[test]
    fn prop_knight_cardinality((size, origin) in board_and_origin(16)) {
        prop_assume!(size >= 5);
        let n = knight_reach(size, origin).len();
        prop_assert!([2, 3, 4, 6, 8].contains(&n), "knight count {}", n);
        let (dr, dc) = edge_distance(size, origin);
        if dr >= 2 && dc >= 2 {
            prop_assert_eq!(n, 8);
        }
        if dr == 0 && dc == 0 {
            prop_assert_eq!(n, 2);
        }
    }

    /// Property: king has 3 at corners, 5 on edges, 8 inside
    #[test]
    fn prop_king_cardinality((size, origin) in board_and_origin(16)) {
        prop_assume!(size >= 3);
        let n = king_reach(size, origin).len();
        let expected = match edge_distance(size, origin) {
            (0, 0) => 3,
            (0, _) | (_, 0) => 5,
            _ => 8,
        };
        prop_assert_eq!(n, expected);
    }

    /// Property: pawns step toward their own side's far edge
    #[test]
    fn prop_pawn_asymmetry((origin_row, col) in (0usize..8, 0usize..8)) {
        let origin = Coord::new(origin_row, col, 8).expect("in bounds");

        let white = pawn_reach(8, origin, Color::White).to_pairs();
        let expected_white = match origin_row {
            0 => vec![],
            6 => vec![(4, col), (5, col)],
            r => vec![(r - 1, col)],
        };
        prop_assert_eq!(white, expected_white);

        let black = pawn_reach(8, origin, Color::Black).to_pairs();
        let expected_black = match origin_row {
            7 => vec![],
            1 => vec![(2, col), (3, col)],
            r => vec![(r + 1, col)],
        };
        prop_assert_eq!(black, expected_black);
    }

    /// Property: generating twice marks the same cells as once
    #[test]
    fn prop_generate_idempotent(
        (size, origin) in board_and_origin(12),
        piece in piece_strategy(),
        color in color_strategy(),
    ) {
        let mut board = Board::new(size).expect("non-zero size");
        board.place(origin, piece);
        board.generate(origin, color);
        let once = board.clone();
        board.generate(origin, color);
        prop_assert_eq!(board, once);
    }

    /// Property: generate marks exactly the rule's result
    #[test]
    fn prop_generate_marks_reach(
        (size, origin) in board_and_origin(12),
        piece in piece_strategy(),
        color in color_strategy(),
    ) {
        let mut board = Board::new(size).expect("non-zero size");
        board.place(origin, piece);
        let expected = board.reachable(origin, color);
        board.generate(origin, color);
        let marked: Vec<Coord> = board.marked().collect();
        let expected: Vec<Coord> = expected.into_iter().collect();
        prop_assert_eq!(marked, expected);
        prop_assert_eq!(board.piece_at(origin), Some(piece));
    }

    /// Property: an empty origin leaves the board untouched
    #[test]
    fn prop_empty_origin_noop(
        (size, origin) in board_and_origin(12),
        color in color_strategy(),
    ) {
        let mut board = Board::new(size).expect("non-zero size");
        let before = board.clone();
        prop_assert_eq!(board.generate(origin, color), 0);
        prop_assert_eq!(board, before);
    }
}
