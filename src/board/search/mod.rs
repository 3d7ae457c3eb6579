//! Time-bounded minimax search.
//!
//! Iterative deepening runs a full-width minimax (no pruning) at depth 1,
//! 2, 3, ... until the time budget runs out or the depth ceiling is hit.
//! Only fully completed depths count: a depth interrupted by the deadline
//! is thrown away and the previous depth's move stands.

mod log;
mod minimax;

use std::time::{Duration, Instant};

pub use log::{DebugLogger, FileLogger, NullLogger, SearchLogger};

use self::minimax::SearchContext;
use super::{Board, Color, Move, MoveList};

/// Budget used when a caller gives no move time.
pub const DEFAULT_MOVE_TIME_MS: u64 = 200;

/// Hard ceiling on iterative deepening.
pub const MAX_SEARCH_DEPTH: u32 = 128;

/// Score of a mate delivered at the root; mates further away score less.
pub const MATE_SCORE: i32 = 1_000_000;

/// How long and how deep a search may go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchLimits {
    pub max_time: Duration,
    pub max_depth: u32,
}

impl SearchLimits {
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        SearchLimits {
            max_time: Duration::from_millis(ms),
            max_depth: MAX_SEARCH_DEPTH,
        }
    }

    #[must_use]
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth.clamp(1, MAX_SEARCH_DEPTH);
        self
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits::from_millis(DEFAULT_MOVE_TIME_MS)
    }
}

/// Node counters for one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Minimax calls made.
    pub nodes_visited: u64,
    /// Leaves scored by the evaluator.
    pub nodes_evaluated: u64,
}

/// Outcome of a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    /// Score of `best_move` from White's point of view.
    pub score: i32,
    /// Deepest fully completed depth; 0 when no depth finished in time or
    /// only one move was legal.
    pub depth: u32,
    /// Totals over every depth, abandoned ones included.
    pub stats: SearchStats,
}

/// Pick a move for the side to move within `max_ms` milliseconds.
///
/// Returns `None` only when there is no legal move; check
/// [`Board::get_state`] first if the position may be over. The board is
/// unchanged on return.
pub fn find_best_move(board: &mut Board, max_ms: u64) -> Option<Move> {
    find_best_move_with(board, SearchLimits::from_millis(max_ms), &NullLogger)
        .map(|result| result.best_move)
}

/// Full search entry point with explicit limits and a diagnostic sink.
pub fn find_best_move_with(
    board: &mut Board,
    limits: SearchLimits,
    logger: &dyn SearchLogger,
) -> Option<SearchResult> {
    let start = Instant::now();
    let moves = board.generate_moves();
    let first = moves.first()?;

    if moves.len() == 1 {
        logger.log(&format!("only legal move {first}"));
        return Some(SearchResult {
            best_move: first,
            score: board.evaluate(),
            depth: 0,
            stats: SearchStats::default(),
        });
    }

    let mut ctx = SearchContext::new(start, limits.max_time);
    let mut result = SearchResult {
        best_move: first,
        score: board.evaluate(),
        depth: 0,
        stats: SearchStats::default(),
    };

    for depth in 1..=limits.max_depth.max(1) {
        let visited_before = ctx.stats.nodes_visited;
        let evaluated_before = ctx.stats.nodes_evaluated;

        let completed = search_root(board, &moves, depth, &mut ctx);
        let elapsed = start.elapsed().as_millis();
        let visited = ctx.stats.nodes_visited - visited_before;
        let evaluated = ctx.stats.nodes_evaluated - evaluated_before;

        match completed {
            RootOutcome::Completed { best_move, score } => {
                result.best_move = best_move;
                result.score = score;
                result.depth = depth;
                logger.log(&format!(
                    "depth {depth} best {best_move} score {score} visited {visited} \
                     evaluated {evaluated} time {elapsed}ms"
                ));
                // A full-width pass already found the shortest mate; deeper
                // passes can only return the same line.
                if score.abs() >= MATE_SCORE - MAX_SEARCH_DEPTH as i32 {
                    logger.log(&format!("depth {depth} found a forced mate, stopping"));
                    break;
                }
            }
            RootOutcome::Cancelled { root_index } => {
                logger.log(&format!(
                    "depth {depth} cancelled at root move {}/{} visited {visited} \
                     evaluated {evaluated} time {elapsed}ms",
                    root_index + 1,
                    moves.len()
                ));
                break;
            }
        }
    }

    result.stats = ctx.stats;
    Some(result)
}

enum RootOutcome {
    Completed { best_move: Move, score: i32 },
    Cancelled { root_index: usize },
}

fn search_root(
    board: &mut Board,
    moves: &MoveList,
    depth: u32,
    ctx: &mut SearchContext,
) -> RootOutcome {
    let maximizing = board.turn() == Color::White;
    let mut best: Option<(Move, i32)> = None;

    for (idx, &mv) in moves.iter().enumerate() {
        let state = board.make_move(mv);
        let score = ctx.minimax(board, depth - 1, 1);
        board.undo_move(mv, state);

        if ctx.cancelled {
            return RootOutcome::Cancelled { root_index: idx };
        }

        // Strict comparison keeps the earliest of equally scored moves.
        let better = match best {
            None => true,
            Some((_, best_score)) if maximizing => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if better {
            best = Some((mv, score));
        }
    }

    match best {
        Some((best_move, score)) => RootOutcome::Completed { best_move, score },
        None => RootOutcome::Cancelled { root_index: 0 },
    }
}
