//! Core chess types.
//!
//! This module contains the fundamental value types used throughout the engine:
//! - `PieceType`, `Color` and `Piece` - piece kinds, sides and colored pieces
//! - `Square` - 0-63 board index (a1 = 0, h8 = 63)
//! - `Move` and `MoveList` - packed 16-bit moves
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

// Re-export all public types
pub use castling::CastlingRights;
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece, PieceType};
pub use square::Square;

pub(crate) use piece::PROMOTION_TYPES;
