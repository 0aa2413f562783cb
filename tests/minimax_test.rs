//! Tests for minimax search.

use strictly_minimax::{
    Action, Board, Minimax, Player, actions, initial_state, minimax, minimax_value, player,
    result, terminal,
};

#[test]
fn test_perfect_play_draws() {
    assert_eq!(minimax_value(&initial_state()), 0);
}

#[test]
fn test_completes_row_to_win() {
    // X to move with two in the top row.
    let board: Board = "XX./OO./...".parse().unwrap();
    assert_eq!(player(&board), Player::X);
    let action = minimax(&board).expect("board is live");
    assert_eq!(action, Action::new(0, 2));
    assert_eq!(minimax_value(&result(&board, action).unwrap()), 1);
}

#[test]
fn test_lost_position_still_returns_first_move() {
    // Turn is derived from mark counts, so O is on move here. Blocking at
    // (0, 2) still loses to the fork at the center, every reply is worth 1
    // and the first in row-major order is kept.
    let board: Board = "XX./O../...".parse().unwrap();
    assert_eq!(player(&board), Player::O);
    let action = minimax(&board).expect("board is live");
    assert_eq!(action, Action::new(0, 2));
    assert_eq!(minimax_value(&result(&board, action).unwrap()), 1);
    assert_eq!(minimax_value(&board), 1);
}

#[test]
fn test_o_wins_when_it_can() {
    // O to move, O holds two in the middle row.
    let board: Board = "XX./OO./X..".parse().unwrap();
    assert_eq!(player(&board), Player::O);
    assert_eq!(minimax(&board), Some(Action::new(1, 2)));
    assert_eq!(minimax_value(&board), -1);
}

#[test]
fn test_no_move_on_terminal_boards() {
    for text in ["XXX/OO./...", "XX./OOO/X..", "XOX/XOO/OXX", "X.O/XO./X.."] {
        let board: Board = text.parse().unwrap();
        assert!(terminal(&board));
        assert_eq!(minimax(&board), None, "board {}", text);
    }
}

#[test]
fn test_recommended_action_is_legal() {
    let boards = [".../.../...", "X../.../...", "X../.O./..X", "XO./.X./..O"];
    for text in boards {
        let board: Board = text.parse().unwrap();
        let action = minimax(&board).expect("board is live");
        assert!(actions(&board).contains(&action));
    }
}

#[test]
fn test_value_is_deterministic() {
    let board: Board = "X../.O./...".parse().unwrap();
    let first = minimax_value(&board);
    assert_eq!(minimax_value(&board), first);
    let copy = board;
    assert_eq!(minimax_value(&copy), first);
}

#[test]
fn test_decision_reports_search() {
    let board: Board = "XX./OO./...".parse().unwrap();
    let mut search = Minimax::new();
    let decision = search.decide(&board);
    assert_eq!(decision.action, Some(Action::new(0, 2)));
    assert_eq!(decision.value, 1);
    assert_eq!(decision.nodes, search.nodes());
    assert!(decision.nodes > actions(&board).len() as u64);
}

#[test]
fn test_self_play_line_draws() {
    let mut board = initial_state();
    while let Some(action) = minimax(&board) {
        board = result(&board, action).unwrap();
    }
    assert!(terminal(&board));
    assert_eq!(board.winner(), None);
    assert!(board.is_full());
}
