//! Error types for the rule engine.
//!
//! None of these are raised by correct use of the engine: they cover untrusted
//! coordinates and text input only.

use crate::location::Move;
use derive_more::{Display, Error};

/// A coordinate or move was rejected by one of the checked entry points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum RulesError {
    #[display(fmt = "({}, {}) is not on the board", row, col)]
    OutOfBounds { row: usize, col: usize },
    #[display(fmt = "{} is not a legal move", mv)]
    IllegalMove { mv: Move },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid move string")]
pub struct ParseMoveError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid color string")]
pub struct ParseColorError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "unrecognized board symbol {:?}", symbol)]
    BadSymbol { symbol: char },
    #[display(fmt = "expected 64 cells, found {}", found)]
    WrongLength { found: usize },
}
