use serde::Deserialize;

use minimax_chess::board::{find_best_move_with, Board, NullLogger, SearchLimits};

#[derive(Deserialize)]
struct PositionSet {
    positions: Vec<Position>,
}

#[derive(Deserialize)]
struct Position {
    name: String,
    fen: String,
    #[serde(default)]
    legal_moves: Option<usize>,
    state: String,
    #[serde(default)]
    mate_in_one: Option<String>,
}

fn load() -> PositionSet {
    let data = include_str!("data/positions.json");
    serde_json::from_str(data).expect("invalid positions.json")
}

#[test]
fn position_suite_classifies_states() {
    for position in load().positions {
        let mut board = Board::try_from_fen(&position.fen)
            .unwrap_or_else(|e| panic!("{}: bad fen: {e}", position.name));

        if let Some(expected) = position.legal_moves {
            assert_eq!(
                board.generate_moves().len(),
                expected,
                "legal move count for {}",
                position.name
            );
        }
        assert_eq!(
            board.get_state().to_string(),
            position.state,
            "state of {}",
            position.name
        );
        assert_eq!(board.to_fen(), position.fen, "{} changed", position.name);
    }
}

#[test]
fn position_suite_finds_mates_in_one() {
    let limits = SearchLimits::from_millis(30_000).with_max_depth(3);

    for position in load().positions {
        let Some(expected) = position.mate_in_one else {
            continue;
        };
        let mut board = Board::from_fen(&position.fen);
        let winner = if board.white_to_move() { "white wins" } else { "black wins" };

        let result = find_best_move_with(&mut board, limits, &NullLogger)
            .unwrap_or_else(|| panic!("{}: no move found", position.name));
        assert_eq!(result.best_move.to_string(), expected, "{}", position.name);

        let mv = board.parse_move(&expected).expect("expected move is legal");
        let _ = board.make_move(mv);
        assert_eq!(board.get_state().to_string(), winner, "{}", position.name);
    }
}
