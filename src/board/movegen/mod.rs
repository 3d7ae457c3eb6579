mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attacks::{DIAGONAL_RAYS, STRAIGHT_RAYS};
use super::{Board, Color, Move, MoveList, PieceType, Square};

/// What a pseudo-legal pass should produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GenMode {
    /// Every pseudo-legal move, castling included.
    Moves,
    /// Only the squares pieces attack; see [`Board::generate_attacks`].
    Attacks,
}

impl Board {
    /// Pseudo-legal moves of `color`, scanning squares a1..h8.
    pub(crate) fn generate_pseudo_moves(&self, color: Color, mode: GenMode) -> MoveList {
        let mut moves = MoveList::new();

        for from in Square::all() {
            let Some(piece) = self.piece_at(from) else {
                continue;
            };
            if piece.color != color {
                continue;
            }
            match piece.kind {
                PieceType::Pawn => self.generate_pawn_moves(from, color, mode, &mut moves),
                PieceType::Knight => self.generate_knight_moves(from, color, &mut moves),
                PieceType::Bishop => {
                    self.generate_slider_moves(from, color, &DIAGONAL_RAYS, &mut moves);
                }
                PieceType::Rook => {
                    self.generate_slider_moves(from, color, &STRAIGHT_RAYS, &mut moves);
                }
                PieceType::Queen => {
                    self.generate_slider_moves(from, color, &STRAIGHT_RAYS, &mut moves);
                    self.generate_slider_moves(from, color, &DIAGONAL_RAYS, &mut moves);
                }
                PieceType::King => self.generate_king_moves(from, color, mode, &mut moves),
            }
        }
        moves
    }

    /// Plain move or capture onto `to`, depending on what stands there.
    #[inline]
    fn step_move(&self, from: Square, to: Square) -> Move {
        match self.piece_at(to) {
            Some(victim) => Move::capture(from, to, Some(victim)),
            None => Move::quiet(from, to),
        }
    }

    /// All legal moves for the side to move.
    ///
    /// Records which color, if any, has its king attacked (see
    /// [`Board::color_in_check`]) and then keeps each pseudo-legal move only
    /// if making it leaves the mover's king unattacked. The board is
    /// unchanged on return.
    ///
    /// # Panics
    /// Panics if either side is missing its king.
    pub fn generate_moves(&mut self) -> MoveList {
        let color = self.turn;
        self.color_in_check = if self.is_in_check(color) {
            Some(color)
        } else if self.is_in_check(color.opponent()) {
            Some(color.opponent())
        } else {
            None
        };

        let pseudo = self.generate_pseudo_moves(color, GenMode::Moves);
        let mut legal = MoveList::new();
        for &mv in &pseudo {
            let state = self.make_move(mv);
            if !self.is_in_check(color) {
                legal.push(mv);
            }
            self.undo_move(mv, state);
        }
        legal
    }

    /// Leaf count of the legal move tree `depth` plies deep.
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for &mv in &moves {
            let state = self.make_move(mv);
            nodes += self.perft(depth - 1);
            self.undo_move(mv, state);
        }
        nodes
    }

    /// Perft split by root move, in generation order.
    pub fn perft_divide(&mut self, depth: u32) -> Vec<(Move, u64)> {
        let moves = self.generate_moves();
        let mut counts = Vec::with_capacity(moves.len());
        for &mv in &moves {
            let state = self.make_move(mv);
            let nodes = if depth <= 1 { 1 } else { self.perft(depth - 1) };
            self.undo_move(mv, state);
            counts.push((mv, nodes));
        }
        counts
    }
}
