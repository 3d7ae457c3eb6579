use super::super::attacks::KING_TARGETS;
use super::super::{Board, Color, Move, MoveList, Piece, PieceType, Square};
use super::GenMode;

const KING_HOME_FILE: usize = 4;

impl Board {
    pub(crate) fn generate_king_moves(
        &self,
        from: Square,
        color: Color,
        mode: GenMode,
        moves: &mut MoveList,
    ) {
        for &to in &KING_TARGETS[from.index()] {
            if self.is_enemy(to, color) {
                moves.push(self.step_move(from, to));
            } else if mode == GenMode::Moves && self.is_empty(to) {
                moves.push(Move::quiet(from, to));
            }
        }

        if mode == GenMode::Moves {
            self.generate_castling_moves(from, color, moves);
        }
    }

    /// Castling relies on `color_in_check` having been refreshed for this
    /// position.
    fn generate_castling_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let rank = color.back_rank();
        if from != square(KING_HOME_FILE, rank) || self.color_in_check == Some(color) {
            return;
        }

        let rook = Some(Piece::new(PieceType::Rook, color));
        let opponent = color.opponent();

        if self.castling_rights.has(color, true)
            && self.piece_at(square(7, rank)) == rook
            && [5, 6].iter().all(|&f| self.is_empty(square(f, rank)))
            && ![4, 5, 6]
                .iter()
                .any(|&f| self.is_square_attacked(square(f, rank), opponent))
        {
            moves.push(Move::castle_kingside(from, square(6, rank)));
        }

        if self.castling_rights.has(color, false)
            && self.piece_at(square(0, rank)) == rook
            && [1, 2, 3].iter().all(|&f| self.is_empty(square(f, rank)))
            && ![4, 3, 2]
                .iter()
                .any(|&f| self.is_square_attacked(square(f, rank), opponent))
        {
            moves.push(Move::castle_queenside(from, square(2, rank)));
        }
    }
}

#[inline]
fn square(file: usize, rank: usize) -> Square {
    Square::from_index(rank * 8 + file)
}
