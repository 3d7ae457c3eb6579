use super::super::{Board, Color, Move, MoveList, Square};

impl Board {
    /// Walk each ray until the edge, stopping before a friendly piece or on
    /// an enemy one.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        rays: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        for &(df, dr) in rays {
            let mut cursor = from;
            while let Some(to) = cursor.offset(df, dr) {
                match self.piece_at(to) {
                    None => moves.push(Move::quiet(from, to)),
                    Some(piece) => {
                        if piece.color != color {
                            moves.push(Move::capture(from, to, Some(piece)));
                        }
                        break;
                    }
                }
                cursor = to;
            }
        }
    }
}
