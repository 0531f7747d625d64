//! Implements game-level Othello logic on top of [`Board`].

use crate::board::{Board, DIRECTIONS};
use crate::disc::{Cell, Color};
use crate::error::RulesError;
use crate::location::{Move, MoveList};
use std::fmt;

/// The complete state of an Othello game: the board and the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    turn: Color,
}

impl Default for GameState {
    /// Gets the starting position with the starting player to move.
    fn default() -> Self {
        Self::new(Board::new(), Color::default())
    }
}

impl GameState {
    /// Construct a position from a board and the side to move.
    pub const fn new(board: Board, turn: Color) -> Self {
        Self { board, turn }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Whether `color` may place at (`row`, `col`).
    /// Off-board coordinates are never legal.
    pub fn is_legal_move(&self, row: usize, col: usize, color: Color) -> bool {
        match Move::new(row, col) {
            Ok(mv) => self.is_legal(mv, color),
            Err(_) => false,
        }
    }

    /// Whether `color` may play `mv`: the cell is empty and at least one run closes.
    #[inline]
    pub fn is_legal(&self, mv: Move, color: Color) -> bool {
        self.board.get(mv).is_empty()
            && DIRECTIONS
                .iter()
                .any(|&direction| self.board.run_length(mv, direction, color) > 0)
    }

    /// Total number of pieces `color` would flip by placing at (`row`, `col`).
    /// Zero for occupied or off-board cells.
    pub fn count_captures(&self, row: usize, col: usize, color: Color) -> u32 {
        match Move::new(row, col) {
            Ok(mv) if self.board.get(mv).is_empty() => DIRECTIONS
                .iter()
                .map(|&direction| self.board.run_length(mv, direction, color) as u32)
                .sum(),
            _ => 0,
        }
    }

    /// Play `mv` for the side to move: place, flip every closed run, and hand the turn over.
    ///
    /// `mv` must be legal for the side to move; check with [`GameState::is_legal`] first, or
    /// use [`GameState::try_apply_move`] for untrusted input. An illegal move leaves the
    /// position inconsistent with the rules, but never indexes outside the board.
    pub fn apply_move(&mut self, mv: Move) {
        debug_assert!(
            self.is_legal(mv, self.turn),
            "illegal move {} for {}",
            mv,
            self.turn
        );

        // Rays from one origin never overlap, so each run can be flipped as it is found.
        for &direction in DIRECTIONS.iter() {
            self.board.flip_run(mv, direction, self.turn);
        }

        self.board.set(mv, Cell::from(self.turn));
        self.turn = !self.turn;
    }

    /// Checked [`GameState::apply_move`] for coordinates from an untrusted source.
    pub fn try_apply_move(&mut self, row: usize, col: usize) -> Result<Move, RulesError> {
        let mv = Move::new(row, col)?;
        if !self.is_legal(mv, self.turn) {
            return Err(RulesError::IllegalMove { mv });
        }

        self.apply_move(mv);
        Ok(mv)
    }

    /// Return the position after `mv`, leaving `self` untouched.
    #[inline]
    pub fn with_move(mut self, mv: Move) -> Self {
        self.apply_move(mv);
        self
    }

    /// Hand the turn to the other side without placing a piece.
    /// Only meaningful when the side to move has no legal move.
    #[inline]
    pub fn pass(&mut self) {
        self.turn = !self.turn;
    }

    /// Get the legal moves for the side to move, in row-major order.
    #[inline]
    pub fn generate_moves(&self) -> MoveList {
        self.moves_for(self.turn)
    }

    /// Get the legal moves for `color`, regardless of whose turn it is.
    pub fn moves_for(&self, color: Color) -> MoveList {
        let mut moves = MoveList::default();
        for mv in Move::all().filter(|&mv| self.is_legal(mv, color)) {
            moves.push(mv);
        }
        moves
    }

    pub fn has_legal_moves(&self, color: Color) -> bool {
        Move::all().any(|mv| self.is_legal(mv, color))
    }

    /// The game is over when neither side can move, whoever's turn it is.
    pub fn is_terminal(&self) -> bool {
        !self.has_legal_moves(Color::Dark) && !self.has_legal_moves(Color::Light)
    }

    #[inline]
    pub fn count_pieces(&self, color: Color) -> u32 {
        self.board.count(Cell::from(color))
    }

    /// Score the board as: # `color` pieces - # opponent pieces.
    #[inline]
    pub fn score_absolute_difference(&self, color: Color) -> i32 {
        self.count_pieces(color) as i32 - self.count_pieces(!color) as i32
    }

    /// The side with more pieces, or `None` for a tie.
    /// Only a final result once [`GameState::is_terminal`] holds.
    pub fn winner(&self) -> Option<Color> {
        match self.score_absolute_difference(Color::Dark) {
            d if d > 0 => Some(Color::Dark),
            d if d < 0 => Some(Color::Light),
            _ => None,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(
            f,
            "Dark {} - Light {}, {} to move",
            self.count_pieces(Color::Dark),
            self.count_pieces(Color::Light),
            self.turn
        )
    }
}
