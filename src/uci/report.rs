use std::time::Duration;

use crate::board::{Board, GameState, Move};

pub fn print_ready() {
    println!("readyok");
}

/// `bestmove 0000` stands in for "no move" when the game is already over.
pub fn print_bestmove(best_move: Option<Move>) {
    match best_move {
        Some(mv) => println!("bestmove {mv}"),
        None => println!("bestmove 0000"),
    }
}

pub fn print_info_string(message: &str) {
    println!("info string {message}");
}

pub fn print_perft_divide(divide: &[(Move, u64)], elapsed: Duration) {
    for (mv, nodes) in divide {
        println!("{mv}: {nodes}");
    }
    let total: u64 = divide.iter().map(|(_, nodes)| nodes).sum();
    println!();
    println!("Nodes searched: {total}");
    print_info_string(&format!("perft time_ms {}", elapsed.as_millis()));
}

pub fn print_position(board: &Board, state: GameState) {
    println!("{board}");
    println!("Fen: {}", board.to_fen());
    println!("State: {state}");
}
