use super::super::attacks::KNIGHT_TARGETS;
use super::super::{Board, Color, MoveList, Square};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &to in &KNIGHT_TARGETS[from.index()] {
            if !self.is_friendly(to, color) {
                moves.push(self.step_move(from, to));
            }
        }
    }
}
