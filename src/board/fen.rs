use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::state::BoardState;
use super::{Board, CastlingRights, Color, Move, Piece, PieceType, Square};

impl Board {
    /// Parse a position from FEN text.
    ///
    /// The first four fields are required. The half-move clock seeds the
    /// fifty-move counter when present; a missing full-move number defaults
    /// to 1.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRank { rank: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    if file > 8 {
                        return Err(FenError::WrongFileCount { rank: rank + 1, files: file });
                    }
                    continue;
                }
                let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let Some(sq) = Square::new(file, rank) else {
                    return Err(FenError::WrongFileCount {
                        rank: rank + 1,
                        files: file + 1,
                    });
                };
                board.set_piece(sq, piece);
                file += 1;
            }
            if file != 8 {
                return Err(FenError::WrongFileCount {
                    rank: rank + 1,
                    files: file,
                });
            }
        }

        board.turn = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        for c in parts[2].chars() {
            match c {
                'K' => board.castling_rights |= CastlingRights::WHITE_KINGSIDE,
                'Q' => board.castling_rights |= CastlingRights::WHITE_QUEENSIDE,
                'k' => board.castling_rights |= CastlingRights::BLACK_KINGSIDE,
                'q' => board.castling_rights |= CastlingRights::BLACK_QUEENSIDE,
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        board.en_passant = if parts[3] == "-" {
            None
        } else {
            // The target sits empty behind a pawn the opponent just pushed
            // two ranks.
            let expected_rank = match board.turn {
                Color::White => 5,
                Color::Black => 2,
            };
            let pusher = Piece::new(PieceType::Pawn, board.turn.opponent());
            match Square::from_str(parts[3]) {
                Ok(sq)
                    if sq.rank() == expected_rank
                        && board.is_empty(sq)
                        && sq
                            .offset(0, -board.turn.pawn_direction())
                            .and_then(|pawn| board.piece_at(pawn))
                            == Some(pusher) =>
                {
                    Some(sq)
                }
                _ => {
                    return Err(FenError::InvalidEnPassant {
                        found: parts[3].to_string(),
                    })
                }
            }
        };

        if let Some(field) = parts.get(4) {
            board.fifty_move_counter =
                field
                    .parse()
                    .map_err(|_| FenError::InvalidHalfmoveClock {
                        found: (*field).to_string(),
                    })?;
        }
        if let Some(field) = parts.get(5) {
            board.fullmove_number = field.parse().ok().filter(|&n| n > 0).unwrap_or(1);
        }

        for color in Color::BOTH {
            let found = board
                .squares
                .iter()
                .flatten()
                .filter(|p| p.color == color && p.is(PieceType::King))
                .count();
            if found != 1 {
                return Err(FenError::MissingKing { color, found });
            }
        }

        Ok(board)
    }

    /// Parse a position from FEN text.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        match Self::try_from_fen(fen) {
            Ok(board) => board,
            Err(err) => panic!("invalid FEN '{fen}': {err}"),
        }
    }

    /// Six-field FEN text for the position.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match self.squares[rank * 8 + file] {
                    Some(piece) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.turn {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            self.castling_rights,
            ep,
            self.fifty_move_counter,
            self.fullmove_number
        )
    }

    /// Resolve coordinate notation (`e2e4`, `e7e8q`) against the legal moves.
    ///
    /// # Example
    /// ```
    /// use minimax_chess::board::Board;
    ///
    /// let mut board = Board::new();
    /// let mv = board.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&mut self, text: &str) -> Result<Move, MoveParseError> {
        if !text.is_ascii() || text.len() < 4 || text.len() > 5 {
            return Err(MoveParseError::InvalidLength {
                len: text.chars().count(),
            });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: text.to_string(),
        };
        let from = Square::from_str(&text[0..2]).map_err(|_| invalid_square())?;
        let to = Square::from_str(&text[2..4]).map_err(|_| invalid_square())?;

        let promotion = match text[4..].chars().next() {
            None => None,
            Some(c @ ('n' | 'b' | 'r' | 'q')) => PieceType::from_char(c),
            Some(c) => return Err(MoveParseError::InvalidPromotion { char: c }),
        };

        self.generate_moves()
            .into_iter()
            .find(|mv| mv.from() == from && mv.to() == to && mv.promotion_type() == promotion)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
    }

    /// Play a move given as text if it names a legal move.
    ///
    /// Text that matches no legal move is ignored: the board is left as it
    /// was and `None` comes back.
    pub fn play_move_text(&mut self, text: &str) -> Option<(Move, BoardState)> {
        let mv = self.parse_move(text).ok()?;
        let state = self.make_move(mv);
        Some((mv, state))
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_fen_round_trip() {
        let board = Board::try_from_fen(START_FEN).unwrap();
        assert_eq!(board, Board::new());
        assert_eq!(board.to_fen(), START_FEN);

        let kiwipete = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        assert_eq!(Board::from_fen(kiwipete).to_fen(), kiwipete);
    }

    #[test]
    fn test_fen_black_to_move() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        let board = Board::try_from_fen(fen).unwrap();
        assert!(!board.white_to_move());
        assert_eq!(board.en_passant(), Some("e3".parse().unwrap()));
    }

    #[test]
    fn test_fen_error_too_few_parts() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w");
        assert!(matches!(result, Err(FenError::TooFewParts { found: 2 })));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let result =
            Board::try_from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidPiece { char: 'x' })));
    }

    #[test]
    fn test_fen_error_rank_shape() {
        let seven_ranks = Board::try_from_fen("8/8/8/8/8/8/4K2k w - - 0 1");
        assert!(matches!(seven_ranks, Err(FenError::InvalidRank { rank: 7 })));

        let wide = Board::try_from_fen("8/8/8/8/8/8/8/4K2k1 w - - 0 1");
        assert!(matches!(wide, Err(FenError::WrongFileCount { rank: 1, .. })));

        let short = Board::try_from_fen("k6/8/8/8/8/8/8/K7 w - - 0 1");
        assert_eq!(
            short.unwrap_err(),
            FenError::WrongFileCount { rank: 8, files: 7 }
        );

        let short_digits = Board::try_from_fen("k7/8/8/3/8/8/8/K7 w - - 0 1");
        assert_eq!(
            short_digits.unwrap_err(),
            FenError::WrongFileCount { rank: 5, files: 3 }
        );
    }

    #[test]
    fn test_fen_error_invalid_side_to_move() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidSideToMove { .. })));
    }

    #[test]
    fn test_fen_error_invalid_castling() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidCastling { char: 'X' })));
    }

    #[test]
    fn test_fen_error_invalid_en_passant() {
        let bad_square =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1");
        assert!(matches!(bad_square, Err(FenError::InvalidEnPassant { .. })));

        let wrong_rank =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e3 0 1");
        assert!(matches!(wrong_rank, Err(FenError::InvalidEnPassant { .. })));
    }

    #[test]
    fn test_fen_error_kings() {
        let none = Board::try_from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(
            none.unwrap_err(),
            FenError::MissingKing {
                color: Color::Black,
                found: 0
            }
        );

        let two = Board::try_from_fen("k7/8/8/8/8/8/8/K6K w - - 0 1");
        assert_eq!(
            two.unwrap_err(),
            FenError::MissingKing {
                color: Color::White,
                found: 2
            }
        );
    }

    #[test]
    fn test_fen_clocks() {
        let board = Board::try_from_fen("8/8/8/8/8/8/8/K1k5 w - - 42 17").unwrap();
        assert_eq!(board.fifty_move_counter(), 42);
        assert_eq!(board.fullmove_number(), 17);

        let short = Board::try_from_fen("8/8/8/8/8/8/8/K1k5 b - -").unwrap();
        assert_eq!(short.fifty_move_counter(), 0);
        assert_eq!(short.fullmove_number(), 1);

        let bad = Board::try_from_fen("8/8/8/8/8/8/8/K1k5 w - - x 1");
        assert!(matches!(bad, Err(FenError::InvalidHalfmoveClock { .. })));
    }

    #[test]
    fn test_fen_castling_subset() {
        let board =
            Board::try_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").unwrap();
        assert!(board.castling_rights().has(Color::White, true));
        assert!(!board.castling_rights().has(Color::White, false));
        assert!(!board.castling_rights().has(Color::Black, true));
        assert!(board.castling_rights().has(Color::Black, false));
        assert!(board.to_fen().contains(" Kq "));
    }

    #[test]
    fn test_parse_move_e2e4() {
        let mut board = Board::new();
        let mv = board.parse_move("e2e4").unwrap();
        assert!(mv.is_double_pawn_push());
        assert_eq!(mv.from(), Square::new(4, 1).unwrap());
        assert_eq!(mv.to(), Square::new(4, 3).unwrap());
    }

    #[test]
    fn test_parse_move_promotion() {
        let mut board = Board::try_from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        let mv = board.parse_move("a7a8n").unwrap();
        assert_eq!(mv.promotion_type(), Some(PieceType::Knight));
        assert!(board.parse_move("a7a8").is_err());
    }

    #[test]
    fn test_parse_move_errors() {
        let mut board = Board::new();
        assert!(matches!(
            board.parse_move("e2"),
            Err(MoveParseError::InvalidLength { len: 2 })
        ));
        assert!(matches!(
            board.parse_move("z9z9"),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert!(matches!(
            board.parse_move("e2e5"),
            Err(MoveParseError::IllegalMove { .. })
        ));

        let mut promo = Board::try_from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
        assert!(matches!(
            promo.parse_move("a7a8p"),
            Err(MoveParseError::InvalidPromotion { char: 'p' })
        ));
    }

    #[test]
    fn test_play_move_text_ignores_unmatched_text() {
        let mut board = Board::new();
        let before = board.clone();
        assert!(board.play_move_text("e2e5").is_none());
        assert!(board.play_move_text("hello").is_none());
        assert_eq!(board, before);

        let (mv, state) = board.play_move_text("g1f3").unwrap();
        assert!(!board.white_to_move());
        board.undo_move(mv, state);
        assert_eq!(board, before);
    }

    #[test]
    fn test_from_str_trait() {
        let board: Board = START_FEN.parse().unwrap();
        assert!(board.white_to_move());
    }
}
