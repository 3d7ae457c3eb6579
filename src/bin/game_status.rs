use std::env;
use std::process::ExitCode;

use minimax_chess::board::Board;
use minimax_chess::uci::try_parse_position_command;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: game_status <move1> <move2> ...");
        return ExitCode::FAILURE;
    }

    let mut parts = vec!["position", "startpos", "moves"];
    parts.extend(args.iter().map(String::as_str));

    let mut board = Board::new();
    if let Err(err) = try_parse_position_command(&mut board, &parts) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    let legal_moves = board.generate_moves();
    let state = board.get_state();
    println!("side_to_move: {}", board.turn());
    println!("in_check: {}", board.is_king_in_check());
    println!("state: {state}");
    println!("legal_moves: {}", legal_moves.len());
    for mv in &legal_moves {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}
