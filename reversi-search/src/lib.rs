//! Bounded-depth adversarial search for two-player, perfect-information games.
//!
//! The search knows nothing about any particular game. A game plugs in by implementing
//! [`SearchState`] for its positions and [`Evaluator`] for its static scorer, and the
//! [`Searcher`] only ever holds the evaluator.

mod search;

pub use search::{Pruning, SearchResult, Searcher};

/// A game position the search can explore.
///
/// Implementations are cloned once per explored child, so siblings never share state.
pub trait SearchState: Clone {
    type Move: Copy;
    type Moves: IntoIterator<Item = Self::Move>;

    /// The legal moves for the side to move, in the order ties should be broken.
    fn generate_moves(&self) -> Self::Moves;

    /// Play a move returned by [`SearchState::generate_moves`] on this position.
    fn apply_move(&mut self, mv: Self::Move);

    /// Whether the game is over.
    fn is_terminal(&self) -> bool;

    /// Whether the side to move is the one the search maximizes for.
    /// This is a property of the side, not of the depth it is reached at.
    fn is_maximizing_player(&self) -> bool;
}

/// A static position scorer.
pub trait Evaluator<S> {
    /// Score `state` from the perspective of the side to move: higher is better for it.
    fn evaluate(&self, state: &S) -> i32;
}

impl<S, F> Evaluator<S> for F
where
    F: Fn(&S) -> i32,
{
    #[inline]
    fn evaluate(&self, state: &S) -> i32 {
        self(state)
    }
}
