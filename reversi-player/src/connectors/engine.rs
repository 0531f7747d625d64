//! [`Connector`] for the search engine.

use super::Connector;
use crate::engine::Engine;
use crate::error::ConnectorError;
use async_std::task;
use async_trait::async_trait;
use reversi_rules::{Color, GameState, Move};

/// Plays the moves chosen by an [`Engine`].
///
/// The search blocks for as long as it takes, so it runs on the blocking thread pool and
/// the game driver simply awaits it.
#[derive(Clone, Debug)]
pub struct EngineConnector {
    engine: Engine,
}

impl EngineConnector {
    pub fn new(engine: Engine) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl Connector for EngineConnector {
    fn color(&self) -> Color {
        self.engine.color()
    }

    async fn choose_move(&mut self, state: &GameState) -> Result<Move, ConnectorError> {
        let engine = self.engine.clone();
        let state = *state;
        let result = task::spawn_blocking(move || engine.choose_move(&state)).await;

        result.best_move.ok_or(ConnectorError::NoMove {
            color: self.engine.color(),
        })
    }
}
