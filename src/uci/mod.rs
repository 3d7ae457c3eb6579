//! Universal Chess Interface (UCI) protocol implementation.
//!
//! Reads commands line by line, drives an [`EngineController`] and prints
//! replies to stdout. Input that cannot be used is answered with an
//! `info string` line and leaves the position as it was.

use std::fmt;
use std::io::{self, BufRead};
use std::sync::Arc;
use std::time::Instant;

use crate::board::{Board, DebugLogger, FenError, FileLogger, MoveParseError, SearchLogger};
use crate::engine::EngineController;

pub mod command;
pub mod options;
pub mod report;

use command::{parse_uci_command, GoParams, UciCommand};
use options::{parse_setoption, UciOptionAction, UciOptions};

/// Error type for UCI position command parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciError {
    /// Invalid FEN string
    InvalidFen(FenError),
    /// Invalid move in the move list
    InvalidMove { move_str: String, error: MoveParseError },
    /// Missing required parts in the command
    MissingParts,
}

impl fmt::Display for UciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UciError::InvalidFen(e) => write!(f, "Invalid FEN: {e}"),
            UciError::InvalidMove { move_str, error } => {
                write!(f, "Invalid move '{move_str}': {error}")
            }
            UciError::MissingParts => write!(f, "Missing required parts in position command"),
        }
    }
}

impl std::error::Error for UciError {}

impl From<FenError> for UciError {
    fn from(e: FenError) -> Self {
        UciError::InvalidFen(e)
    }
}

/// Parse a `position` command and play its moves.
///
/// Accepts `position startpos` and `position fen <4-6 fields>`, optionally
/// followed by `moves <m1> <m2> ...`. On error `board` is left untouched.
pub fn try_parse_position_command(board: &mut Board, parts: &[&str]) -> Result<(), UciError> {
    let (mut position, rest) = match parts.get(1) {
        Some(&"startpos") => (Board::new(), &parts[2..]),
        Some(&"fen") => {
            let fields: Vec<&str> = parts[2..]
                .iter()
                .copied()
                .take_while(|&p| p != "moves")
                .collect();
            if fields.is_empty() {
                return Err(UciError::MissingParts);
            }
            let start = Board::try_from_fen(&fields.join(" "))?;
            let rest = &parts[2 + fields.len()..];
            (start, rest)
        }
        _ => return Err(UciError::MissingParts),
    };

    match rest.split_first() {
        None => {}
        Some((&"moves", moves)) => {
            for &text in moves {
                let mv = position
                    .parse_move(text)
                    .map_err(|error| UciError::InvalidMove {
                        move_str: text.to_string(),
                        error,
                    })?;
                let _ = position.make_move(mv);
            }
        }
        Some(_) => return Err(UciError::MissingParts),
    }

    *board = position;
    Ok(())
}

/// Parse a `position` command, reporting failures as an `info string`.
pub fn parse_position_command(board: &mut Board, parts: &[&str]) {
    if let Err(e) = try_parse_position_command(board, parts) {
        log::warn!("rejected position command: {e}");
        report::print_info_string(&e.to_string());
    }
}

/// One UCI conversation: the game position, options and running search.
pub struct UciSession {
    controller: EngineController,
    options: UciOptions,
}

impl UciSession {
    #[must_use]
    pub fn new() -> Self {
        let mut controller = EngineController::new();
        controller.set_logger(Arc::new(DebugLogger));
        UciSession {
            controller,
            options: UciOptions::default(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.controller.board()
    }

    #[must_use]
    pub fn options(&self) -> &UciOptions {
        &self.options
    }

    /// Handle one input line. Returns `false` once `quit` was processed.
    pub fn handle_line(&mut self, line: &str) -> bool {
        let Some(command) = parse_uci_command(line) else {
            return true;
        };

        match command {
            UciCommand::Uci => self.options.print(),
            UciCommand::IsReady => report::print_ready(),
            UciCommand::UciNewGame => self.controller.new_game(),
            UciCommand::Position(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                parse_position_command(self.controller.board_mut(), &parts);
            }
            UciCommand::Go(params) => self.go(params),
            UciCommand::Perft(depth) => {
                let start = Instant::now();
                let divide = self.controller.board_mut().perft_divide(depth);
                report::print_perft_divide(&divide, start.elapsed());
            }
            UciCommand::SetOption(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                self.set_option(&parts);
            }
            UciCommand::Display => {
                let mut board = self.controller.board().clone();
                let state = board.get_state();
                report::print_position(&board, state);
            }
            UciCommand::Stop => {
                self.controller.wait_for_search();
            }
            UciCommand::Quit => {
                self.controller.wait_for_search();
                return false;
            }
            UciCommand::Malformed { line, reason } => {
                log::warn!("malformed command '{line}': {reason}");
                report::print_info_string(&format!("{reason}: {line}"));
            }
            UciCommand::Unknown(line) => {
                log::warn!("unknown command '{line}'");
                report::print_info_string(&format!("unknown command: {line}"));
            }
        }
        true
    }

    fn go(&mut self, params: GoParams) {
        let mut probe = self.controller.board().clone();
        let state = probe.get_state();
        if state.is_terminal() {
            report::print_info_string(&format!("game over: {state}"));
            report::print_bestmove(None);
            return;
        }

        let limits = self.options.limits_for(params);
        let started = self.controller.start_search(limits, |result| {
            report::print_bestmove(result.map(|r| r.best_move));
        });
        if let Err(err) = started {
            log::error!("could not start search thread: {err}");
            report::print_info_string(&format!("search failed to start: {err}"));
            report::print_bestmove(None);
        }
    }

    fn set_option(&mut self, parts: &[&str]) {
        let Some((name, value)) = parse_setoption(parts) else {
            report::print_info_string("setoption needs 'name <id> [value <x>]'");
            return;
        };
        match self.options.apply_setoption(&name, value.as_deref()) {
            Ok(None) => {}
            Ok(Some(UciOptionAction::ReplaceSearchLog(path))) => {
                let logger: Arc<dyn SearchLogger> = match path {
                    Some(path) => Arc::new(FileLogger::new(path)),
                    None => Arc::new(DebugLogger),
                };
                self.controller.set_logger(logger);
            }
            Err(reason) => {
                log::warn!("setoption rejected: {reason}");
                report::print_info_string(&reason);
            }
        }
    }
}

impl Default for UciSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the command loop on stdin until `quit` or end of input.
pub fn run_uci_loop() {
    let stdin = io::stdin();
    let mut session = UciSession::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                log::error!("failed to read stdin: {err}");
                break;
            }
        };
        if !session.handle_line(&line) {
            return;
        }
    }
    session.controller.wait_for_search();
}
