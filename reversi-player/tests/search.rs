//! The search engine driven over real Othello positions.

use reversi_player::{BoardEvaluator, Engine, Position};
use reversi_rules::eval;
use reversi_rules::test_utils::random_game;
use reversi_rules::{Color, GameState, Move};
use reversi_search::{Pruning, Searcher};

/// Mid-game positions with a move available, from a few random games.
fn sample_positions() -> Vec<GameState> {
    (0..6)
        .flat_map(random_game)
        .filter(|state| !state.generate_moves().is_empty())
        .step_by(5)
        .collect()
}

#[test]
fn depth_zero_picks_the_best_immediate_evaluation() {
    for state in sample_positions() {
        let mover = state.turn();

        // After the move the opponent is on turn, so its evaluation is negated.
        let mut expected: Option<(Move, i32)> = None;
        for mv in state.generate_moves() {
            let score = -eval::evaluate(&state.with_move(mv));
            if expected.map_or(true, |(_, best)| score > best) {
                expected = Some((mv, score));
            }
        }

        let result = Engine::new(mover, 0).choose_move(&state);
        assert_eq!(result.best_move, expected.map(|(mv, _)| mv), "\n{}", state);
        assert_eq!(Some(result.score), expected.map(|(_, score)| score));
    }
}

#[test]
fn pruning_chooses_the_same_moves() {
    for state in sample_positions().into_iter().take(12) {
        let position = Position {
            state,
            maximizer: state.turn(),
        };
        for depth in 0..3 {
            let plain = Searcher::new(BoardEvaluator::default(), depth)
                .with_pruning(Pruning::None)
                .find_best_move(&position);
            let pruned = Searcher::new(BoardEvaluator::default(), depth)
                .with_pruning(Pruning::AlphaBeta)
                .find_best_move(&position);

            assert_eq!(plain.best_move, pruned.best_move);
            assert_eq!(plain.score, pruned.score);
            assert!(pruned.nodes <= plain.nodes);
        }
    }
}

#[test]
fn same_position_same_answer() {
    let state = random_game(3)[20];
    let engine = Engine::new(state.turn(), 3);
    let first = engine.choose_move(&state);
    let second = engine.choose_move(&state);
    assert_eq!(first.best_move, second.best_move);
    assert_eq!(first.nodes, second.nodes);
    assert_eq!(first.score, second.score);
}

#[test]
fn search_never_touches_the_callers_state() {
    let state = random_game(5)[30];
    let before = state;
    let _ = Engine::new(state.turn(), 2).choose_move(&state);
    assert_eq!(state, before);
}

#[test]
fn forced_pass_leaves_the_engine_without_a_move() {
    let board = format!("######O.{}", "#".repeat(56)).parse().unwrap();
    let state = GameState::new(board, Color::Light);
    assert!(!state.is_terminal());

    let result = Engine::new(Color::Light, 2).choose_move(&state);
    assert_eq!(result.best_move, None);

    let mut passed = state;
    passed.pass();
    let reply = Engine::new(Color::Dark, 2).choose_move(&passed);
    assert_eq!(reply.best_move, Some(Move::new(0, 7).unwrap()));
}
