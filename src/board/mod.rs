//! Chess board representation and game logic.
//!
//! A 64-slot mailbox board with reversible make/undo, a legal move
//! generator built on pseudo-legal generation plus a make/probe/undo
//! filter, a material evaluator and a time-bounded minimax search.
//!
//! # Example
//! ```
//! use minimax_chess::board::{Board, GameState};
//!
//! let mut board = Board::new();
//! let moves = board.generate_moves();
//! assert_eq!(moves.len(), 20);
//! assert_eq!(board.get_state(), GameState::InProgress);
//! ```

mod attacks;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError, SquareError};
pub use state::{Board, BoardState, GameState};
pub use types::{CastlingRights, Color, Move, MoveList, MoveListIntoIter, Piece, PieceType, Square};

pub use search::{
    find_best_move, find_best_move_with, DebugLogger, FileLogger, NullLogger, SearchLimits,
    SearchLogger, SearchResult, SearchStats, DEFAULT_MOVE_TIME_MS, MATE_SCORE, MAX_SEARCH_DEPTH,
};
