//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `counts.rs` - Whole-board destination totals per piece
//! - `edge_cases.rs` - Corners, edges, tiny boards and marker interplay
//! - `proptest.rs` - Property-based tests

mod proptest;
