//! The machine player: the generic search run over Othello positions.

use reversi_rules::eval::Weights;
use reversi_rules::{Color, GameState, Move, MoveList};
use reversi_search::{Evaluator, Pruning, SearchResult, SearchState, Searcher};
use tracing::debug;

/// A [`GameState`] seen from one side: the side the search maximizes for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub state: GameState,
    pub maximizer: Color,
}

impl SearchState for Position {
    type Move = Move;
    type Moves = MoveList;

    #[inline]
    fn generate_moves(&self) -> MoveList {
        self.state.generate_moves()
    }

    #[inline]
    fn apply_move(&mut self, mv: Move) {
        self.state.apply_move(mv)
    }

    #[inline]
    fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    #[inline]
    fn is_maximizing_player(&self) -> bool {
        self.state.turn() == self.maximizer
    }
}

/// The rule engine's static evaluator behind the search's [`Evaluator`] interface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoardEvaluator {
    pub weights: Weights,
}

impl Evaluator<Position> for BoardEvaluator {
    #[inline]
    fn evaluate(&self, position: &Position) -> i32 {
        self.weights.evaluate(&position.state)
    }
}

/// A fixed-depth machine player for one color.
#[derive(Clone, Debug)]
pub struct Engine {
    color: Color,
    searcher: Searcher<BoardEvaluator>,
}

impl Engine {
    /// An engine with the default evaluator weights and alpha-beta pruning.
    pub fn new(color: Color, depth: u32) -> Self {
        Self::with_searcher(color, Searcher::new(BoardEvaluator::default(), depth))
    }

    pub fn with_searcher(color: Color, searcher: Searcher<BoardEvaluator>) -> Self {
        Self { color, searcher }
    }

    pub fn with_pruning(self, pruning: Pruning) -> Self {
        Self {
            color: self.color,
            searcher: self.searcher.with_pruning(pruning),
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.searcher.depth()
    }

    /// Search for this engine's best move in `state`.
    ///
    /// The score is from this engine's point of view. `best_move` is `None` when the side
    /// to move has nothing to play, which the caller resolves by passing or ending the game.
    pub fn choose_move(&self, state: &GameState) -> SearchResult<Move> {
        let position = Position {
            state: *state,
            maximizer: self.color,
        };
        let result = self.searcher.find_best_move(&position);

        debug!(
            color = %self.color,
            best_move = ?result.best_move.map(|mv| mv.to_string()),
            score = result.score,
            nodes = result.nodes,
            "engine chose"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reversi_rules::eval;

    #[test]
    fn position_maximizes_for_its_color() {
        let state = GameState::default();
        let dark = Position {
            state,
            maximizer: Color::Dark,
        };
        let light = Position {
            state,
            maximizer: Color::Light,
        };
        assert!(dark.is_maximizing_player());
        assert!(!light.is_maximizing_player());
    }

    #[test]
    fn evaluator_matches_rule_engine() {
        let mut state = GameState::default();
        state.apply_move(Move::new(2, 4).unwrap());
        let position = Position {
            state,
            maximizer: Color::Dark,
        };
        assert_eq!(
            BoardEvaluator::default().evaluate(&position),
            eval::evaluate(&state)
        );
    }

    #[test]
    fn engine_returns_a_legal_opening() {
        let engine = Engine::new(Color::Dark, 2);
        let state = GameState::default();
        let result = engine.choose_move(&state);
        let mv = result.best_move.unwrap();
        assert!(state.is_legal(mv, Color::Dark));
        assert!(result.nodes > 4);
    }

    #[test]
    fn engine_has_no_move_in_finished_game() {
        let board = format!("{}{}", "#".repeat(40), "O".repeat(24)).parse().unwrap();
        let state = GameState::new(board, Color::Light);
        let result = Engine::new(Color::Light, 3).choose_move(&state);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 1);
        assert_eq!(result.score, -eval::WIN_SCORE);
    }
}
