use super::state::BoardState;
use super::{Board, Color, Move, Piece, PieceType, Square};

/// Rook origin and destination squares for a castle landing on `king_to`.
#[inline]
fn castle_rook_squares(king_to: Square) -> (Square, Square) {
    let rank = king_to.rank() * 8;
    if king_to.file() == 6 {
        (Square::from_index(rank + 7), Square::from_index(rank + 5))
    } else {
        (Square::from_index(rank), Square::from_index(rank + 3))
    }
}

/// Square of the pawn removed by an en-passant capture: destination file,
/// origin rank.
#[inline]
fn en_passant_victim(mv: Move) -> Square {
    Square::from_index(mv.from().rank() * 8 + mv.to().file())
}

impl Board {
    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index()] = Some(piece);
    }

    #[inline]
    pub(crate) fn take_piece(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Drop the castling right tied to a rook's home corner, if `sq` is one.
    fn revoke_corner_right(&mut self, sq: Square, color: Color) {
        if sq.rank() != color.back_rank() {
            return;
        }
        match sq.file() {
            0 => self.castling_rights.remove(color, false),
            7 => self.castling_rights.remove(color, true),
            _ => {}
        }
    }

    /// Apply `mv` and return the token that undoes it.
    ///
    /// # Panics
    /// Panics if the origin square does not hold a piece of the side to move.
    pub fn make_move(&mut self, mv: Move) -> BoardState {
        let state = BoardState {
            en_passant: self.en_passant,
            castling_rights: self.castling_rights,
            fifty_move_counter: self.fifty_move_counter,
        };

        let from = mv.from();
        let to = mv.to();
        let color = self.turn;
        let moving = match self.piece_at(from) {
            Some(piece) if piece.color == color => piece,
            other => panic!("make_move {mv}: origin holds {other:?}, {color} to move"),
        };

        if mv.is_capture() || moving.is(PieceType::Pawn) {
            self.fifty_move_counter = 0;
        } else {
            self.fifty_move_counter = self.fifty_move_counter.saturating_add(1);
        }

        self.en_passant = if mv.is_double_pawn_push() {
            from.offset(0, color.pawn_direction())
        } else {
            None
        };

        match moving.kind {
            PieceType::King => self.castling_rights.remove_color(color),
            PieceType::Rook => self.revoke_corner_right(from, color),
            _ => {}
        }
        if let Some(captured) = mv.captured() {
            if captured.is(PieceType::Rook) && !mv.is_en_passant() {
                self.revoke_corner_right(to, captured.color);
            }
        }

        self.take_piece(from);
        self.set_piece(to, moving);

        if mv.is_en_passant() {
            self.take_piece(en_passant_victim(mv));
        } else if mv.is_castling() {
            let (rook_from, rook_to) = castle_rook_squares(to);
            let rook = self.take_piece(rook_from);
            assert!(rook.is_some(), "castle {mv} without a rook on {rook_from}");
            self.squares[rook_to.index()] = rook;
        } else if let Some(kind) = mv.promotion_type() {
            self.set_piece(to, Piece::new(kind, color));
        }

        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.turn = color.opponent();

        state
    }

    /// Reverse `mv`; `state` must be the token its `make_move` returned.
    pub fn undo_move(&mut self, mv: Move, state: BoardState) {
        let from = mv.from();
        let to = mv.to();
        let color = self.turn.opponent();
        self.turn = color;
        if color == Color::Black {
            self.fullmove_number -= 1;
        }

        let moved = self.take_piece(to);
        let restored = if mv.is_promotion() {
            Some(Piece::new(PieceType::Pawn, color))
        } else {
            moved
        };
        self.squares[from.index()] = restored;

        if mv.is_en_passant() {
            self.squares[en_passant_victim(mv).index()] = mv.captured();
        } else if mv.is_castling() {
            let (rook_from, rook_to) = castle_rook_squares(to);
            let rook = self.take_piece(rook_to);
            self.squares[rook_from.index()] = rook;
        } else if mv.is_capture() {
            self.squares[to.index()] = mv.captured();
        }

        self.en_passant = state.en_passant;
        self.castling_rights = state.castling_rights;
        self.fifty_move_counter = state.fifty_move_counter;
    }
}
