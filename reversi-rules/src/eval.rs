//! Static evaluation of Othello positions.
//!
//! Scores are always from the perspective of the side to move in the evaluated state.
//! Finished games score [`WIN_SCORE`], `-WIN_SCORE` or 0 from the final piece counts.
//! Every other position gets a weighted sum of board features, and that sum can never
//! reach the terminal band (see [`Weights::max_heuristic`]).

use crate::disc::{Cell, Color};
use crate::game::GameState;
use crate::location::Move;
use crate::{EDGE_LENGTH, MOVE_CAPACITY, NUM_SPACES};

/// Score of a finished game won by the side to move.
pub const WIN_SCORE: i32 = 100_000;

const LAST: usize = EDGE_LENGTH - 1;

/// Each corner with its three neighbours: along both edges, and diagonally inward.
const CORNER_GROUPS: [((usize, usize), [(usize, usize); 3]); 4] = [
    ((0, 0), [(0, 1), (1, 0), (1, 1)]),
    ((0, LAST), [(0, LAST - 1), (1, LAST), (1, LAST - 1)]),
    ((LAST, 0), [(LAST - 1, 0), (LAST, 1), (LAST - 1, 1)]),
    ((LAST, LAST), [(LAST - 1, LAST), (LAST, LAST - 1), (LAST - 1, LAST - 1)]),
];

/// Number of edge cells that are not corners.
const NUM_EDGE_CELLS: i32 = 4 * (EDGE_LENGTH as i32 - 2);

/// Tunable weights for each evaluation term.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Weights {
    /// Per piece of material difference.
    pub material: i32,
    /// Per occupied corner.
    pub corner: i32,
    /// Per piece next to a corner that is still empty. Counts against the owner.
    pub corner_adjacent: i32,
    /// Per piece on a non-corner edge cell.
    pub edge: i32,
    /// Per legal move of mobility difference.
    pub mobility: i32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            material: 1,
            corner: 25,
            corner_adjacent: 8,
            edge: 2,
            mobility: 5,
        }
    }
}

impl Weights {
    /// An upper bound on the magnitude of any heuristic score under these weights.
    pub fn max_heuristic(&self) -> i32 {
        self.material.abs() * NUM_SPACES as i32
            + self.corner.abs() * 4
            + self.corner_adjacent.abs() * 12
            + self.edge.abs() * NUM_EDGE_CELLS
            + self.mobility.abs() * MOVE_CAPACITY as i32
    }

    /// Score `state` for the side to move.
    pub fn evaluate(&self, state: &GameState) -> i32 {
        let me = state.turn();

        if state.is_terminal() {
            return match state.score_absolute_difference(me) {
                d if d > 0 => WIN_SCORE,
                d if d < 0 => -WIN_SCORE,
                _ => 0,
            };
        }

        self.material * state.score_absolute_difference(me)
            + self.corners(state, me)
            + self.edges(state, me)
            + self.mobility(state, me)
    }

    /// Corner ownership, plus the exposure of cells next to corners nobody holds yet.
    fn corners(&self, state: &GameState, me: Color) -> i32 {
        let mut score = 0;

        for &(corner, neighbours) in CORNER_GROUPS.iter() {
            let corner_cell = cell(state, corner);
            if corner_cell.is_empty() {
                for &square in neighbours.iter() {
                    score -= self.corner_adjacent * owner_sign(cell(state, square), me);
                }
            } else {
                score += self.corner * owner_sign(corner_cell, me);
            }
        }

        score
    }

    fn edges(&self, state: &GameState, me: Color) -> i32 {
        Move::all()
            .filter(|&mv| is_edge_not_corner(mv))
            .map(|mv| self.edge * owner_sign(state.board().get(mv), me))
            .sum()
    }

    fn mobility(&self, state: &GameState, me: Color) -> i32 {
        let mine = state.moves_for(me).len() as i32;
        let theirs = state.moves_for(!me).len() as i32;
        self.mobility * (mine - theirs)
    }
}

/// Score `state` for the side to move with the default [`Weights`].
pub fn evaluate(state: &GameState) -> i32 {
    Weights::default().evaluate(state)
}

fn cell(state: &GameState, (row, col): (usize, usize)) -> Cell {
    state.board().cell_at(row, col).unwrap_or(Cell::Empty)
}

/// +1 for `me`, -1 for the opponent, 0 for empty.
fn owner_sign(cell: Cell, me: Color) -> i32 {
    match cell.color() {
        Some(color) if color == me => 1,
        Some(_) => -1,
        None => 0,
    }
}

fn is_edge(index: usize) -> bool {
    index == 0 || index == LAST
}

fn is_edge_not_corner(mv: Move) -> bool {
    (is_edge(mv.row()) || is_edge(mv.col())) && !(is_edge(mv.row()) && is_edge(mv.col()))
}
