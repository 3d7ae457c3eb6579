//! Engine controller implementation.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::board::{find_best_move_with, Board, NullLogger, SearchLimits, SearchLogger, SearchResult};

/// Search thread stack size (32 MB); the recursion is one frame per ply.
const SEARCH_STACK_SIZE: usize = 32 * 1024 * 1024;

/// A search running on its own thread against a private copy of the board.
pub struct SearchJob {
    handle: JoinHandle<Option<SearchResult>>,
}

impl SearchJob {
    /// Spawn the search. The caller's board is not touched.
    pub fn start(
        board: Board,
        limits: SearchLimits,
        logger: Arc<dyn SearchLogger>,
    ) -> io::Result<Self> {
        Self::start_with(board, limits, logger, |_| {})
    }

    /// Spawn the search and run `on_complete` on the search thread with
    /// its result before the job finishes.
    pub fn start_with<F>(
        mut board: Board,
        limits: SearchLimits,
        logger: Arc<dyn SearchLogger>,
        on_complete: F,
    ) -> io::Result<Self>
    where
        F: FnOnce(Option<SearchResult>) + Send + 'static,
    {
        let handle = thread::Builder::new()
            .name("search".to_string())
            .stack_size(SEARCH_STACK_SIZE)
            .spawn(move || {
                let result = find_best_move_with(&mut board, limits, logger.as_ref());
                on_complete(result);
                result
            })?;
        Ok(SearchJob { handle })
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the search and return its result.
    ///
    /// A search thread that panicked yields `None`.
    pub fn join(self) -> Option<SearchResult> {
        match self.handle.join() {
            Ok(result) => result,
            Err(_) => {
                log::error!("search thread panicked");
                None
            }
        }
    }
}

/// Owns the game position and at most one background search.
pub struct EngineController {
    board: Board,
    logger: Arc<dyn SearchLogger>,
    current_job: Option<SearchJob>,
}

impl EngineController {
    #[must_use]
    pub fn new() -> Self {
        EngineController {
            board: Board::new(),
            logger: Arc::new(NullLogger),
            current_job: None,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access to the position; waits for a running search first.
    pub fn board_mut(&mut self) -> &mut Board {
        self.wait_for_search();
        &mut self.board
    }

    pub fn set_board(&mut self, board: Board) {
        self.wait_for_search();
        self.board = board;
    }

    /// Back to the initial position with an empty search log.
    pub fn new_game(&mut self) {
        self.wait_for_search();
        self.board = Board::new();
        self.logger.clear();
    }

    #[must_use]
    pub fn logger(&self) -> &Arc<dyn SearchLogger> {
        &self.logger
    }

    pub fn set_logger(&mut self, logger: Arc<dyn SearchLogger>) {
        self.wait_for_search();
        self.logger = logger;
    }

    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.current_job.as_ref().is_some_and(|job| !job.is_finished())
    }

    /// Block until the running search, if any, has finished.
    ///
    /// There is no way to interrupt a search early; it stops on its own
    /// time budget.
    pub fn wait_for_search(&mut self) -> Option<SearchResult> {
        self.current_job.take().and_then(SearchJob::join)
    }

    /// Search the current position in the background, handing the result to
    /// `on_complete` on the search thread.
    pub fn start_search<F>(&mut self, limits: SearchLimits, on_complete: F) -> io::Result<()>
    where
        F: FnOnce(Option<SearchResult>) + Send + 'static,
    {
        self.wait_for_search();
        let job = SearchJob::start_with(
            self.board.clone(),
            limits,
            Arc::clone(&self.logger),
            on_complete,
        )?;
        self.current_job = Some(job);
        Ok(())
    }
}

impl Default for EngineController {
    fn default() -> Self {
        Self::new()
    }
}
