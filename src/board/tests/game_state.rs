//! Game state classification: mate, stalemate and draw detection.

use crate::board::{Board, GameState};

fn state_of(fen: &str) -> GameState {
    Board::from_fen(fen).get_state()
}

#[test]
fn test_initial_position_in_progress() {
    let mut board = Board::new();
    assert_eq!(board.get_state(), GameState::InProgress);
    assert!(!GameState::InProgress.is_terminal());
}

#[test]
fn test_fools_mate_is_black_win() {
    let mut board = Board::new();
    for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        let _ = board.play_move_text(text).expect("legal");
    }
    assert_eq!(board.get_state(), GameState::BlackWin);
    assert!(board.is_king_in_check());
    assert!(board.generate_moves().is_empty());
}

#[test]
fn test_back_rank_mate_is_white_win() {
    assert_eq!(state_of("4R1k1/5ppp/8/8/8/8/8/6K1 b - - 0 1"), GameState::WhiteWin);
}

#[test]
fn test_stalemate() {
    let state = state_of("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert_eq!(state, GameState::DrawByStalemate);
    assert!(state.is_draw());
}

#[test]
fn test_mate_takes_priority_over_fifty_move_rule() {
    assert_eq!(
        state_of("4R1k1/5ppp/8/8/8/8/8/6K1 b - - 120 80"),
        GameState::WhiteWin
    );
}

#[test]
fn test_fifty_move_rule() {
    let fen_99 = "4k3/8/8/8/8/8/4P3/R3K3 w - - 99 70";
    assert_eq!(state_of(fen_99), GameState::InProgress);

    let mut board = Board::from_fen(fen_99);
    let _ = board.play_move_text("a1a2").expect("legal");
    assert_eq!(board.fifty_move_counter(), 100);
    assert_eq!(board.get_state(), GameState::DrawByFiftyMoveRule);
}

#[test]
fn test_fifty_move_counter_resets_on_pawn_move() {
    let mut board = Board::from_fen("4k3/8/8/8/8/8/4P3/R3K3 w - - 99 70");
    let _ = board.play_move_text("e2e4").expect("legal");
    assert_eq!(board.fifty_move_counter(), 0);
    assert_eq!(board.get_state(), GameState::InProgress);
}

#[test]
fn test_dead_positions() {
    for fen in [
        "4k3/8/8/8/8/8/8/4K3 w - - 0 1",
        "4k3/8/8/8/8/8/8/4KN2 w - - 0 1",
        "4kb2/8/8/8/8/8/8/4K3 b - - 0 1",
        // Same-colored bishops on both sides.
        "4k3/8/8/8/8/8/8/2B1K1b1 w - - 0 1",
    ] {
        assert_eq!(state_of(fen), GameState::DrawByDeadPosition, "{fen}");
    }
}

#[test]
fn test_live_material_is_not_dead() {
    for fen in [
        "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1",
        "4k3/8/8/8/8/8/8/3NK1N1 w - - 0 1",
        "4k3/8/8/8/8/8/8/2B1KB2 w - - 0 1",
        "4k3/8/8/8/8/8/8/3BKN2 w - - 0 1",
    ] {
        assert_eq!(state_of(fen), GameState::InProgress, "{fen}");
    }
}

#[test]
fn test_game_state_display() {
    assert_eq!(GameState::WhiteWin.to_string(), "white wins");
    assert_eq!(
        GameState::DrawByFiftyMoveRule.to_string(),
        "draw by fifty-move rule"
    );
    assert!(!GameState::BlackWin.is_draw());
    assert!(GameState::BlackWin.is_terminal());
}
