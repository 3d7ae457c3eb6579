//! Attack queries.
//!
//! `is_square_attacked` answers by looking outward from the target square
//! for a piece that could reach it, so no move list is built and nothing on
//! the board changes. `generate_attacks` is the move-list view of the same
//! information and backs the square map used for highlighting.

use once_cell::sync::Lazy;

use super::movegen::GenMode;
use super::{Board, Color, MoveList, PieceType, Square};

pub(crate) const KNIGHT_STEPS: [(isize, isize); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub(crate) const KING_STEPS: [(isize, isize); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub(crate) const DIAGONAL_RAYS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
pub(crate) const STRAIGHT_RAYS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

fn step_targets(steps: &[(isize, isize)]) -> [Vec<Square>; 64] {
    std::array::from_fn(|idx| {
        let from = Square::from_index(idx);
        steps
            .iter()
            .filter_map(|&(df, dr)| from.offset(df, dr))
            .collect()
    })
}

/// On-board knight destinations for every square.
pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| step_targets(&KNIGHT_STEPS));

/// On-board king destinations for every square.
pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| step_targets(&KING_STEPS));

impl Board {
    /// True if any piece of `by` attacks `sq` on the current board.
    ///
    /// Occupancy of `sq` itself does not matter, so a defended piece counts
    /// as attacked by its own side.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        let holds = |target: Square, kind: PieceType| {
            matches!(self.piece_at(target), Some(p) if p.color == by && p.kind == kind)
        };

        // A pawn of `by` attacks diagonally forward, so look one rank back.
        let back = -by.pawn_direction();
        for df in [-1, 1] {
            if let Some(from) = sq.offset(df, back) {
                if holds(from, PieceType::Pawn) {
                    return true;
                }
            }
        }

        if KNIGHT_TARGETS[sq.index()]
            .iter()
            .any(|&from| holds(from, PieceType::Knight))
        {
            return true;
        }

        if KING_TARGETS[sq.index()]
            .iter()
            .any(|&from| holds(from, PieceType::King))
        {
            return true;
        }

        self.ray_hits(sq, by, &DIAGONAL_RAYS, PieceType::attacks_diagonally)
            || self.ray_hits(sq, by, &STRAIGHT_RAYS, PieceType::attacks_straight)
    }

    fn ray_hits(
        &self,
        sq: Square,
        by: Color,
        rays: &[(isize, isize)],
        slides: fn(PieceType) -> bool,
    ) -> bool {
        for &(df, dr) in rays {
            let mut cursor = sq;
            while let Some(next) = cursor.offset(df, dr) {
                if let Some(piece) = self.piece_at(next) {
                    if piece.color == by && slides(piece.kind) {
                        return true;
                    }
                    break;
                }
                cursor = next;
            }
        }
        false
    }

    /// Square of `color`'s king, if it has one.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| {
            matches!(self.piece_at(sq), Some(p) if p.color == color && p.is(PieceType::King))
        })
    }

    /// True if `color`'s king is attacked.
    ///
    /// # Panics
    /// Panics if `color` has no king.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some(king) = self.king_square(color) else {
            panic!("no {color} king on the board");
        };
        self.is_square_attacked(king, color.opponent())
    }

    /// True if the side to move is in check.
    #[must_use]
    pub fn is_king_in_check(&self) -> bool {
        self.is_in_check(self.turn)
    }

    /// Attack-only pseudo-legal moves of `by`: pawn diagonals onto any
    /// square, no quiet pushes, no non-capturing king steps, no castling.
    #[must_use]
    pub fn generate_attacks(&self, by: Color) -> MoveList {
        self.generate_pseudo_moves(by, GenMode::Attacks)
    }

    /// Per-square map of the destinations in [`Board::generate_attacks`].
    ///
    /// Every marked square is also reported by
    /// [`Board::is_square_attacked`]; the reverse holds for squares occupied
    /// by the other side. Empty squares covered only by the king stay unmarked.
    #[must_use]
    pub fn attacked_squares(&self, by: Color) -> [bool; 64] {
        let mut map = [false; 64];
        for mv in &self.generate_attacks(by) {
            map[mv.to().index()] = true;
        }
        map
    }
}
