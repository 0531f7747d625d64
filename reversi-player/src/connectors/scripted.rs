//! [`Connector`] that replays a fixed list of moves.

use super::Connector;
use crate::error::ConnectorError;
use async_trait::async_trait;
use reversi_rules::{Color, GameState, Move};
use std::collections::VecDeque;

/// Replays recorded moves in order, whatever the position.
#[derive(Clone, Debug)]
pub struct ScriptedConnector {
    color: Color,
    moves: VecDeque<Move>,
}

impl ScriptedConnector {
    pub fn new(color: Color, moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            color,
            moves: moves.into_iter().collect(),
        }
    }

    /// Moves not played yet.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

#[async_trait]
impl Connector for ScriptedConnector {
    fn color(&self) -> Color {
        self.color
    }

    async fn choose_move(&mut self, _state: &GameState) -> Result<Move, ConnectorError> {
        self.moves.pop_front().ok_or(ConnectorError::ScriptExhausted)
    }
}
