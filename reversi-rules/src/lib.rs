//! `reversi-rules` is the Othello rule engine and static evaluator behind the machine player.
//!
//! This package is organized in three layers:
//!
//!  - [`Board`] is the raw 8x8 grid of [`Cell`]s, plus the directional run scan that every
//!    rule is built on.
//!  - [`GameState`] is a board plus the side to move. It answers all legality, capture and
//!    termination queries, and is the only thing that advances the game.
//!  - [`eval`] scores a [`GameState`] from the perspective of the side to move.
//!
//! Every query is a pure function of an explicitly passed state; nothing here keeps hidden state.

pub mod eval;
pub mod test_utils;

mod board;
mod disc;
mod error;
mod game;
mod location;
mod utils;

pub use board::*;
pub use disc::*;
pub use error::*;
pub use game::*;
pub use location::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;

/// Capacity of a [`MoveList`].
/// A position never has more than 32 legal moves, but a full board's worth keeps any
/// generated move from being dropped.
pub const MOVE_CAPACITY: usize = NUM_SPACES;
