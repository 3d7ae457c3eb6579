pub mod board;
pub mod engine;
pub mod uci;

pub use board::{find_best_move, Board, Color, GameState, Move, Piece, PieceType, Square};
