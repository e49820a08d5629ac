//! Reachability overlay kept apart from board occupancy.

use super::{Coord, ReachSet};

/// A boolean grid parallel to a [`Board`](super::Board).
///
/// Lets several pieces be queried against the same board without markers
/// destroying what the cells hold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Overlay {
    size: usize,
    marks: Vec<bool>,
}

impl Overlay {
    #[must_use]
    pub fn new(size: usize) -> Self {
        Overlay {
            size,
            marks: vec![false; size * size],
        }
    }

    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn mark(&mut self, coord: Coord) {
        let idx = coord.index(self.size);
        self.marks[idx] = true;
    }

    #[inline]
    #[must_use]
    pub fn is_marked(&self, coord: Coord) -> bool {
        self.marks[coord.index(self.size)]
    }

    /// Mark every coordinate of `reach`.
    pub fn extend(&mut self, reach: &ReachSet) {
        for &coord in reach {
            self.mark(coord);
        }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.marks.iter().filter(|&&m| m).count()
    }

    pub fn clear(&mut self) {
        self.marks.fill(false);
    }

    /// Marked coordinates, row-major
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        let size = self.size;
        self.marks
            .iter()
            .enumerate()
            .filter(|(_, m)| **m)
            .map(move |(idx, _)| Coord::from_index(idx, size))
    }
}
