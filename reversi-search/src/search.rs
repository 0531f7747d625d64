//! Fixed-depth minimax, with optional alpha-beta pruning.
//!
//! Scores inside the search are always from the maximizing side's point of view.
//! [`Evaluator`] scores are for the side to move, so they are negated whenever the
//! minimizing side is to move.

use crate::{Evaluator, SearchState};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Larger than any score an evaluator may return.
const INFINITY: i32 = i32::MAX;

/// Whether to prune the tree. Both settings choose the same move with the same score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pruning {
    /// Visit every node: plain minimax.
    None,
    /// Skip subtrees that cannot change the result.
    AlphaBeta,
}

impl Default for Pruning {
    fn default() -> Self {
        Self::AlphaBeta
    }
}

/// The outcome of [`Searcher::find_best_move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult<M> {
    /// `None` if the side to move has no move: the game is over, or it must pass.
    pub best_move: Option<M>,
    /// Minimax value of the position, for the maximizing side.
    pub score: i32,
    /// Number of positions visited, the root included.
    pub nodes: u64,
    /// Wall-clock time spent searching. Never used to pick a move.
    pub elapsed: Duration,
}

/// A fixed-depth searcher bound to one evaluator.
#[derive(Clone, Debug)]
pub struct Searcher<E> {
    evaluator: E,
    depth: u32,
    pruning: Pruning,
}

impl<E> Searcher<E> {
    /// Search every root move, then `depth` further plies below each.
    /// Depth 0 picks the move whose resulting position evaluates best.
    pub fn new(evaluator: E, depth: u32) -> Self {
        Self {
            evaluator,
            depth,
            pruning: Pruning::default(),
        }
    }

    pub fn with_pruning(mut self, pruning: Pruning) -> Self {
        self.pruning = pruning;
        self
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    pub fn pruning(&self) -> Pruning {
        self.pruning
    }

    #[inline]
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Pick the best move for the side to move in `state`.
    ///
    /// Among equally scored moves, the first in generation order wins.
    pub fn find_best_move<S>(&self, state: &S) -> SearchResult<S::Move>
    where
        S: SearchState,
        E: Evaluator<S>,
    {
        let start = Instant::now();
        let mut nodes = 1;
        let maximizing = state.is_maximizing_player();

        let mut best: Option<(S::Move, i32)> = None;
        if !state.is_terminal() {
            let mut alpha = -INFINITY;
            let mut beta = INFINITY;

            for mv in state.generate_moves() {
                let mut child = state.clone();
                child.apply_move(mv);

                let score = match self.pruning {
                    Pruning::None => self.minimax(&child, self.depth, &mut nodes),
                    Pruning::AlphaBeta => {
                        self.alpha_beta(&child, self.depth, alpha, beta, &mut nodes)
                    }
                };
                trace!(score, "root move searched");

                // Strict comparison: the first of several equal moves is kept.
                let improves = match best {
                    None => true,
                    Some((_, best_score)) if maximizing => score > best_score,
                    Some((_, best_score)) => score < best_score,
                };
                if improves {
                    best = Some((mv, score));
                    if maximizing {
                        alpha = score;
                    } else {
                        beta = score;
                    }
                }
            }
        }

        let result = match best {
            Some((mv, score)) => SearchResult {
                best_move: Some(mv),
                score,
                nodes,
                elapsed: start.elapsed(),
            },
            None => SearchResult {
                best_move: None,
                score: self.static_score(state),
                nodes,
                elapsed: start.elapsed(),
            },
        };

        debug!(
            depth = self.depth,
            score = result.score,
            nodes = result.nodes,
            elapsed_us = result.elapsed.as_micros() as u64,
            found_move = result.best_move.is_some(),
            "search finished"
        );
        result
    }

    /// Evaluate `state` for the maximizing side.
    fn static_score<S>(&self, state: &S) -> i32
    where
        S: SearchState,
        E: Evaluator<S>,
    {
        let score = self.evaluator.evaluate(state);
        if state.is_maximizing_player() {
            score
        } else {
            -score
        }
    }

    fn minimax<S>(&self, state: &S, depth: u32, nodes: &mut u64) -> i32
    where
        S: SearchState,
        E: Evaluator<S>,
    {
        *nodes += 1;
        if depth == 0 || state.is_terminal() {
            return self.static_score(state);
        }

        let maximizing = state.is_maximizing_player();
        let mut best: Option<i32> = None;

        for mv in state.generate_moves() {
            let mut child = state.clone();
            child.apply_move(mv);
            let score = self.minimax(&child, depth - 1, nodes);

            best = Some(match best {
                None => score,
                Some(best) if maximizing => best.max(score),
                Some(best) => best.min(score),
            });
        }

        // No moves, but the game goes on: passes are not searched.
        best.unwrap_or_else(|| self.static_score(state))
    }

    /// Fail-soft alpha-beta. The result is exact when it lies strictly inside
    /// `(alpha, beta)`, and otherwise a bound on the exact value on the same side.
    fn alpha_beta<S>(
        &self,
        state: &S,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        nodes: &mut u64,
    ) -> i32
    where
        S: SearchState,
        E: Evaluator<S>,
    {
        *nodes += 1;
        if depth == 0 || state.is_terminal() {
            return self.static_score(state);
        }

        let maximizing = state.is_maximizing_player();
        let mut best: Option<i32> = None;

        for mv in state.generate_moves() {
            let mut child = state.clone();
            child.apply_move(mv);
            let score = self.alpha_beta(&child, depth - 1, alpha, beta, nodes);

            if maximizing {
                let value = best.map_or(score, |best| best.max(score));
                best = Some(value);
                if value >= beta {
                    break;
                }
                alpha = alpha.max(value);
            } else {
                let value = best.map_or(score, |best| best.min(score));
                best = Some(value);
                if value <= alpha {
                    break;
                }
                beta = beta.min(value);
            }
        }

        best.unwrap_or_else(|| self.static_score(state))
    }
}
