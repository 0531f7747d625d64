//! Plays whole games of Othello between humans and the search engine.
//!
//! [`Engine`] binds the generic search to the rule engine. [`connectors`] are the
//! ways a side can choose its moves, and [`play_game`] runs a game between two of them,
//! owning the pass policy that the rule engine leaves to its caller.

pub mod config;
pub mod connectors;

mod engine;
mod error;
mod game;

pub use config::{Difficulty, GameMode, PlayerConfig};
pub use engine::{BoardEvaluator, Engine, Position};
pub use error::ConnectorError;
pub use game::{play_configured, play_game, GameOutcome, Ply};
