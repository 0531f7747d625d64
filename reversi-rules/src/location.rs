//! Code for working with [`Move`]s and [`MoveList`]s.

use crate::error::{ParseMoveError, RulesError};
use crate::{EDGE_LENGTH, MOVE_CAPACITY};
use arrayvec::ArrayVec;
use derive_more::Deref;
use itertools::{iproduct, Itertools};
use std::fmt::{self, Display, Formatter, Write};

/// A placement on the board.
///
/// A [`Move`] can only be built from on-board coordinates, so holding one is proof that
/// indexing the grid with it is in bounds. It says nothing about legality, which depends
/// on the position it is played in.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Move {
    row: u8,
    col: u8,
}

/// The legal moves out of a position, in row-major order.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deref)]
pub struct MoveList(ArrayVec<Move, MOVE_CAPACITY>);

impl Move {
    /// Build a move from row and column coordinates.
    #[inline]
    pub fn new(row: usize, col: usize) -> Result<Self, RulesError> {
        if row < EDGE_LENGTH && col < EDGE_LENGTH {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(RulesError::OutOfBounds { row, col })
        }
    }

    /// Build a move from signed coordinates, as produced by stepping along a direction.
    #[inline]
    pub(crate) fn from_signed(row: isize, col: isize) -> Option<Self> {
        let edge = EDGE_LENGTH as isize;
        if (0..edge).contains(&row) && (0..edge).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Convert from a row-major square index.
    #[inline]
    pub fn from_index(index: usize) -> Result<Self, RulesError> {
        Self::new(index / EDGE_LENGTH, index % EDGE_LENGTH)
    }

    /// Convert into a row-major square index.
    #[inline]
    pub fn to_index(self) -> usize {
        self.row() * EDGE_LENGTH + self.col()
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Get the row and column coordinates.
    #[inline]
    pub fn to_coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    /// The neighbouring square one step along `(d_row, d_col)`, if it is on the board.
    #[inline]
    pub fn step(self, (d_row, d_col): (isize, isize)) -> Option<Self> {
        Self::from_signed(self.row as isize + d_row, self.col as isize + d_col)
    }

    /// Every square on the board, in row-major order.
    pub fn all() -> impl Iterator<Item = Move> {
        iproduct!(0..EDGE_LENGTH as u8, 0..EDGE_LENGTH as u8).map(|(row, col)| Self { row, col })
    }
}

/// Convert this [`Move`] into string notation ("D3": column letter, then 1-indexed row).
impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = "ABCDEFGH".chars().nth(self.col()).ok_or(fmt::Error)?;
        let row_str = "12345678".chars().nth(self.row()).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

/// Build a [`Move`] from a 1-indexed string notation ("D3").
impl std::str::FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParseMoveError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParseMoveError)?;
        let row = chars
            .next()
            .ok_or(ParseMoveError)?
            .to_digit(10)
            .ok_or(ParseMoveError)? as usize;

        if row == 0 || chars.next().is_some() {
            return Err(ParseMoveError);
        }

        Self::new(row - 1, col).map_err(|_| ParseMoveError)
    }
}

impl MoveList {
    /// Append a move. Capacity is a full board, so this cannot overflow for distinct squares.
    #[inline]
    pub(crate) fn push(&mut self, mv: Move) {
        self.0.push(mv)
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = arrayvec::IntoIter<Move, MOVE_CAPACITY>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for MoveList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn move_from_coords() {
        let mv = Move::new(2, 4).unwrap();
        assert_eq!(mv.to_coords(), (2, 4));
        assert_eq!(Move::new(7, 7).unwrap().to_index(), 63);
    }

    #[test]
    fn move_from_coords_fail() {
        assert_eq!(
            Move::new(0, 8),
            Err(RulesError::OutOfBounds { row: 0, col: 8 })
        );
        assert!(Move::new(8, 0).is_err());
        assert!(Move::from_index(64).is_err());
    }

    #[test]
    fn move_index_round_trip() {
        for index in 0..64 {
            assert_eq!(Move::from_index(index).unwrap().to_index(), index);
        }
    }

    #[test]
    fn move_step_stays_on_board() {
        let corner = Move::new(0, 0).unwrap();
        assert_eq!(corner.step((-1, 0)), None);
        assert_eq!(corner.step((1, 1)), Some(Move::new(1, 1).unwrap()));
        assert_eq!(Move::new(7, 7).unwrap().step((0, 1)), None);
    }

    #[test]
    fn all_is_row_major() {
        let squares: Vec<usize> = Move::all().map(Move::to_index).collect();
        assert_eq!(squares, (0..64).collect::<Vec<_>>());
    }

    #[test]
    fn move_from_str_success() {
        assert_eq!(Move::from_str("A1"), Ok(Move::new(0, 0).unwrap()));
        assert_eq!(Move::from_str("h8"), Ok(Move::new(7, 7).unwrap()));
        assert_eq!(Move::from_str("E3"), Ok(Move::new(2, 4).unwrap()));
    }

    #[test]
    fn move_from_str_fail() {
        assert_eq!(Move::from_str(""), Err(ParseMoveError));
        assert_eq!(Move::from_str("A12"), Err(ParseMoveError));
        assert_eq!(Move::from_str("AA"), Err(ParseMoveError));
        assert_eq!(Move::from_str("A9"), Err(ParseMoveError));
        assert_eq!(Move::from_str("A0"), Err(ParseMoveError));
        assert_eq!(Move::from_str("I5"), Err(ParseMoveError));
    }

    #[test]
    fn move_to_str() {
        assert_eq!(Move::new(7, 7).unwrap().to_string(), "H8");
        assert_eq!(Move::new(0, 0).unwrap().to_string(), "A1");
        assert_eq!(Move::from_str("F6").unwrap().to_string(), "F6");
    }

    #[test]
    fn move_list_display() {
        let mut list = MoveList::default();
        assert_eq!(list.to_string(), "[]");
        list.push(Move::new(2, 3).unwrap());
        list.push(Move::new(3, 2).unwrap());
        assert_eq!(list.to_string(), "[D3, C4]");
    }
}
