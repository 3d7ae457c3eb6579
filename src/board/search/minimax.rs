use std::time::{Duration, Instant};

use super::{SearchStats, MATE_SCORE};
use crate::board::{Board, Color};

/// Per-search state threaded through the recursion: the deadline, the
/// cancellation flag and the node counters.
pub(super) struct SearchContext {
    deadline: Option<Instant>,
    pub(super) cancelled: bool,
    pub(super) stats: SearchStats,
}

impl SearchContext {
    pub(super) fn new(start: Instant, budget: Duration) -> Self {
        SearchContext {
            deadline: start.checked_add(budget),
            cancelled: false,
            stats: SearchStats::default(),
        }
    }

    fn out_of_time(&mut self) -> bool {
        if !self.cancelled {
            if let Some(deadline) = self.deadline {
                self.cancelled = Instant::now() >= deadline;
            }
        }
        self.cancelled
    }

    /// Full-width minimax score of `board` from White's point of view.
    ///
    /// Once the deadline has passed the return value is meaningless and
    /// `cancelled` is set; callers must discard it.
    pub(super) fn minimax(&mut self, board: &mut Board, depth: u32, ply: u32) -> i32 {
        self.stats.nodes_visited += 1;
        if self.out_of_time() {
            return 0;
        }

        if depth == 0 {
            self.stats.nodes_evaluated += 1;
            return board.evaluate();
        }

        let moves = board.generate_moves();
        let mover = board.turn();
        if moves.is_empty() {
            if board.color_in_check() == Some(mover) {
                let mate = MATE_SCORE - ply as i32;
                return match mover {
                    Color::White => -mate,
                    Color::Black => mate,
                };
            }
            return 0;
        }

        let maximizing = mover == Color::White;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for &mv in &moves {
            let state = board.make_move(mv);
            let score = self.minimax(board, depth - 1, ply + 1);
            board.undo_move(mv, state);

            if self.cancelled {
                return 0;
            }
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }
}
