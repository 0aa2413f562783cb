//! Tests for agent self-play.

use strictly_minimax::{
    Action, Agent, Board, FirstAvailableAgent, InvalidActionKind, MatchError, MinimaxAgent,
    Outcome, Player, play_match, rules,
};

/// Agent that always names the same square.
struct Stubborn {
    action: Action,
}

impl Agent for Stubborn {
    fn choose(&mut self, _board: &Board) -> Option<Action> {
        Some(self.action)
    }

    fn name(&self) -> &str {
        "stubborn"
    }
}

/// Agent that never moves.
struct Passive;

impl Agent for Passive {
    fn choose(&mut self, _board: &Board) -> Option<Action> {
        None
    }

    fn name(&self) -> &str {
        "passive"
    }
}

#[test]
fn test_minimax_mirror_match_draws() {
    let mut x = MinimaxAgent::new("x");
    let mut o = MinimaxAgent::new("o");
    let record = play_match(&mut x, &mut o).expect("agents play legally");

    assert_eq!(record.outcome, Outcome::Draw);
    assert_eq!(record.history.len(), 9);
    assert_eq!(record.winner_name(), None);
    assert!(record.board.is_full());
}

#[test]
fn test_minimax_beats_first_available() {
    let mut x = MinimaxAgent::new("minimax");
    let mut o = FirstAvailableAgent::new("first");
    let record = play_match(&mut x, &mut o).expect("agents play legally");

    assert_eq!(record.outcome, Outcome::Winner(Player::X));
    assert_eq!(record.winner_name(), Some("minimax"));
}

#[test]
fn test_minimax_never_loses_as_o() {
    let mut x = FirstAvailableAgent::new("first");
    let mut o = MinimaxAgent::new("minimax");
    let record = play_match(&mut x, &mut o).expect("agents play legally");

    assert_ne!(record.outcome, Outcome::Winner(Player::X));
}

#[test]
fn test_history_replays_to_final_board() {
    let mut x = MinimaxAgent::new("minimax");
    let mut o = FirstAvailableAgent::new("first");
    let record = play_match(&mut x, &mut o).unwrap();

    let mut board = rules::initial_state();
    for (i, ply) in record.history.iter().enumerate() {
        let expected = if i % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(ply.player, expected);
        board = rules::result(&board, ply.action).unwrap();
    }
    assert_eq!(board, record.board);
    assert_eq!(rules::outcome(&board), Some(record.outcome));
}

#[test]
fn test_repeated_square_is_rejected() {
    let mut x = Stubborn {
        action: Action::new(1, 1),
    };
    let mut o = Stubborn {
        action: Action::new(1, 1),
    };
    let err = play_match(&mut x, &mut o).unwrap_err();

    match err {
        MatchError::IllegalMove { agent, source } => {
            assert_eq!(agent, "stubborn");
            assert_eq!(source.kind, InvalidActionKind::Occupied);
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_passing_agent_is_rejected() {
    let mut x = MinimaxAgent::new("minimax");
    let mut o = Passive;
    let err = play_match(&mut x, &mut o).unwrap_err();

    assert_eq!(err, MatchError::NoMove("passive".to_string()));
}

#[test]
fn test_record_serializes() {
    let mut x = MinimaxAgent::new("x");
    let mut o = FirstAvailableAgent::new("o");
    let record = play_match(&mut x, &mut o).unwrap();

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["x"], "x");
    assert_eq!(json["history"].as_array().map(Vec::len), Some(record.history.len()));
}
