//! Board shared between concurrent reachability queries.
//!
//! Each query reads an immutable snapshot of the placement, computes its
//! destinations on its own thread, then merges markers into the board
//! under a single lock.

use std::thread;

use log::debug;
use parking_lot::Mutex;

use super::{Board, Cell, Color, Coord, ReachSet};

/// A board behind a mutex, written by one merger at a time.
#[derive(Debug)]
pub struct SharedBoard {
    board: Mutex<Board>,
}

impl SharedBoard {
    #[must_use]
    pub fn new(board: Board) -> Self {
        SharedBoard {
            board: Mutex::new(board),
        }
    }

    /// Copy of the current board
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.board.lock().clone()
    }

    /// Mark the destinations of every `(origin, color)` query.
    ///
    /// Origins are read from the board as it was before any marking, so a
    /// piece overwritten by another query's marker still generates. Returns
    /// the union of all destinations.
    pub fn mark_all(&self, queries: &[(Coord, Color)]) -> ReachSet {
        let snapshot = self.snapshot();
        let snapshot = &snapshot;

        let merged = thread::scope(|s| {
            let handles: Vec<_> = queries
                .iter()
                .map(|&(origin, color)| {
                    s.spawn(move || {
                        let reach = snapshot.reachable(origin, color);
                        let mut board = self.board.lock();
                        for &coord in &reach {
                            board.set(coord, Cell::Marked);
                        }
                        reach
                    })
                })
                .collect();

            let mut merged = ReachSet::new();
            for handle in handles {
                if let Ok(reach) = handle.join() {
                    merged.extend(reach);
                }
            }
            merged
        });

        debug!(
            "merged {} queries into {} marked squares",
            queries.len(),
            merged.len()
        );
        merged
    }

    #[must_use]
    pub fn into_inner(self) -> Board {
        self.board.into_inner()
    }
}
