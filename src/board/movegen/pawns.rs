use super::super::types::PROMOTION_TYPES;
use super::super::{Board, Color, Move, MoveList, Piece, PieceType, Square};
use super::GenMode;

impl Board {
    pub(crate) fn generate_pawn_moves(
        &self,
        from: Square,
        color: Color,
        mode: GenMode,
        moves: &mut MoveList,
    ) {
        let dir = color.pawn_direction();

        if mode == GenMode::Attacks {
            for df in [-1, 1] {
                if let Some(to) = from.offset(df, dir) {
                    moves.push(Move::capture(from, to, self.piece_at(to)));
                }
            }
            return;
        }

        if let Some(to) = from.offset(0, dir) {
            if self.is_empty(to) {
                if to.rank() == color.pawn_promotion_rank() {
                    push_promotions(from, to, None, moves);
                } else {
                    moves.push(Move::quiet(from, to));
                    if from.rank() == color.pawn_start_rank() {
                        if let Some(two) = to.offset(0, dir) {
                            if self.is_empty(two) {
                                moves.push(Move::double_pawn_push(from, two));
                            }
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(to) = from.offset(df, dir) else {
                continue;
            };
            match self.piece_at(to) {
                Some(victim) if victim.color != color => {
                    if to.rank() == color.pawn_promotion_rank() {
                        push_promotions(from, to, Some(victim), moves);
                    } else {
                        moves.push(Move::capture(from, to, Some(victim)));
                    }
                }
                Some(_) => {}
                None if self.en_passant == Some(to) => {
                    let victim = Piece::new(PieceType::Pawn, color.opponent());
                    let beside = from.offset(df, 0).and_then(|sq| self.piece_at(sq));
                    if beside == Some(victim) {
                        moves.push(Move::en_passant(from, to, victim));
                    }
                }
                None => {}
            }
        }
    }
}

fn push_promotions(from: Square, to: Square, captured: Option<Piece>, moves: &mut MoveList) {
    for kind in PROMOTION_TYPES {
        moves.push(Move::promotion(from, to, kind, captured));
    }
}
