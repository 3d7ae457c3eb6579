//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Leaf counts for move generation correctness
//! - `game_state.rs` - Checkmate, stalemate and draw detection
//! - `make_unmake.rs` - Make/undo move correctness
//! - `attacks.rs` - Attack queries and check detection
//! - `edge_cases.rs` - Castling, en passant and promotion corner cases
//! - `eval.rs` - Material evaluation
//! - `search.rs` - Minimax search behaviour
//! - `proptest.rs` - Property-based tests

mod game_state;
