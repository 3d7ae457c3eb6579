use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{CastlingRights, Color, Piece, PieceType, Square};

/// Undo token: the irreversible fields of the board as they were
/// immediately before a move.
///
/// Produced by [`Board::make_move`] and consumed exactly once by the
/// matching [`Board::undo_move`]; tokens must be handed back in reverse
/// order of creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "the state is required to undo the move"]
pub struct BoardState {
    pub(crate) en_passant: Option<Square>,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) fifty_move_counter: u32,
}

/// Classification of a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameState {
    InProgress,
    WhiteWin,
    BlackWin,
    DrawByStalemate,
    DrawByFiftyMoveRule,
    DrawByThreefoldRepetition,
    DrawByDeadPosition,
}

impl GameState {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != GameState::InProgress
    }

    #[must_use]
    pub fn is_draw(self) -> bool {
        matches!(
            self,
            GameState::DrawByStalemate
                | GameState::DrawByFiftyMoveRule
                | GameState::DrawByThreefoldRepetition
                | GameState::DrawByDeadPosition
        )
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameState::InProgress => "in progress",
            GameState::WhiteWin => "white wins",
            GameState::BlackWin => "black wins",
            GameState::DrawByStalemate => "draw by stalemate",
            GameState::DrawByFiftyMoveRule => "draw by fifty-move rule",
            GameState::DrawByThreefoldRepetition => "draw by threefold repetition",
            GameState::DrawByDeadPosition => "draw by dead position",
        };
        write!(f, "{text}")
    }
}

/// Number of half-moves without capture or pawn move that draws the game.
pub(crate) const FIFTY_MOVE_LIMIT: u32 = 100;

/// Mailbox position: one optional piece per square plus the side to move
/// and the irreversible state.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) squares: [Option<Piece>; 64],
    pub(crate) turn: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) fifty_move_counter: u32,
    pub(crate) fullmove_number: u32,
    // Recomputed by every generate_moves call.
    pub(crate) color_in_check: Option<Color>,
}

impl Board {
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];
        for (file, kind) in back_rank.iter().enumerate() {
            board.squares[file] = Some(Piece::new(*kind, Color::White));
            board.squares[8 + file] = Some(Piece::new(PieceType::Pawn, Color::White));
            board.squares[48 + file] = Some(Piece::new(PieceType::Pawn, Color::Black));
            board.squares[56 + file] = Some(Piece::new(*kind, Color::Black));
        }

        board.castling_rights = CastlingRights::all();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: [None; 64],
            turn: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant: None,
            fifty_move_counter: 0,
            fullmove_number: 1,
            color_in_check: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    #[inline]
    pub(crate) fn is_enemy(&self, sq: Square, color: Color) -> bool {
        matches!(self.squares[sq.index()], Some(p) if p.color != color)
    }

    #[inline]
    pub(crate) fn is_friendly(&self, sq: Square, color: Color) -> bool {
        matches!(self.squares[sq.index()], Some(p) if p.color == color)
    }

    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.turn == Color::White
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[must_use]
    pub fn fifty_move_counter(&self) -> u32 {
        self.fifty_move_counter
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// The color whose king was attacked when moves were last generated.
    #[must_use]
    pub fn color_in_check(&self) -> Option<Color> {
        self.color_in_check
    }

    /// Classify the position.
    ///
    /// Generates the legal moves, so the board must hold exactly one king
    /// per color.
    pub fn get_state(&mut self) -> GameState {
        let moves = self.generate_moves();

        if moves.is_empty() {
            if self.is_king_in_check() {
                return match self.turn {
                    Color::White => GameState::BlackWin,
                    Color::Black => GameState::WhiteWin,
                };
            }
            return GameState::DrawByStalemate;
        }

        if self.fifty_move_counter >= FIFTY_MOVE_LIMIT {
            return GameState::DrawByFiftyMoveRule;
        }

        if self.repetition_count() >= 3 {
            return GameState::DrawByThreefoldRepetition;
        }

        if self.is_dead_position() {
            return GameState::DrawByDeadPosition;
        }

        GameState::InProgress
    }

    // No position history is kept, so no repetition is ever observed.
    fn repetition_count(&self) -> u32 {
        0
    }

    /// Neither side has enough material left to deliver mate.
    pub(crate) fn is_dead_position(&self) -> bool {
        let mut minors = 0;
        let mut knights = 0;
        let mut light_bishops = 0;
        let mut dark_bishops = 0;

        for sq in Square::all() {
            let Some(piece) = self.piece_at(sq) else {
                continue;
            };
            match piece.kind {
                PieceType::King => {}
                PieceType::Pawn | PieceType::Rook | PieceType::Queen => return false,
                PieceType::Knight => {
                    minors += 1;
                    knights += 1;
                }
                PieceType::Bishop => {
                    minors += 1;
                    if sq.is_light() {
                        light_bishops += 1;
                    } else {
                        dark_bishops += 1;
                    }
                }
            }
        }

        if minors <= 1 {
            return true;
        }

        knights == 0 && (light_bishops == 0 || dark_bishops == 0)
    }
}

/// Positions compare equal when placement, side to move and the
/// irreversible state match; the cached check marker is ignored.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.squares == other.squares
            && self.turn == other.turn
            && self.castling_rights == other.castling_rights
            && self.en_passant == other.en_passant
            && self.fifty_move_counter == other.fifty_move_counter
            && self.fullmove_number == other.fullmove_number
    }
}

impl Eq for Board {}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Diagram with rank 8 at the top; `.` marks an empty square.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                let sq = Square::from_index(rank * 8 + file);
                let c = self.piece_at(sq).map_or('.', Piece::to_fen_char);
                write!(f, "{c}")?;
                if file < 7 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "{} to move", self.turn)
    }
}
