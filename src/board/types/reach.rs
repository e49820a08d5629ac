//! Reachability result sets.

use std::collections::btree_set;
use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// Destinations reachable by a piece, kept in row-major order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ReachSet(BTreeSet<Coord>);

impl ReachSet {
    #[must_use]
    pub fn new() -> Self {
        ReachSet(BTreeSet::new())
    }

    /// Insert a destination. Returns false if it was already present.
    #[inline]
    pub fn insert(&mut self, coord: Coord) -> bool {
        self.0.insert(coord)
    }

    /// Insert a candidate that may have fallen off the board.
    #[inline]
    pub(crate) fn insert_in_bounds(&mut self, coord: Option<Coord>) {
        if let Some(c) = coord {
            self.0.insert(c);
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.0.contains(&coord)
    }

    pub fn iter(&self) -> btree_set::Iter<'_, Coord> {
        self.0.iter()
    }

    #[must_use]
    pub fn union(&self, other: &ReachSet) -> ReachSet {
        ReachSet(self.0.union(&other.0).copied().collect())
    }

    #[must_use]
    pub fn is_disjoint(&self, other: &ReachSet) -> bool {
        self.0.is_disjoint(&other.0)
    }

    /// (row, col) pairs, handy for assertions and export
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(usize, usize)> {
        self.0.iter().map(|c| (c.row(), c.col())).collect()
    }
}

impl FromIterator<Coord> for ReachSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        ReachSet(iter.into_iter().collect())
    }
}

impl Extend<Coord> for ReachSet {
    fn extend<I: IntoIterator<Item = Coord>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for ReachSet {
    type Item = Coord;
    type IntoIter = btree_set::IntoIter<Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ReachSet {
    type Item = &'a Coord;
    type IntoIter = btree_set::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
