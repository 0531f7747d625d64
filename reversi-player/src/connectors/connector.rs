use crate::error::ConnectorError;
use async_trait::async_trait;
use reversi_rules::{Color, GameState, Move};

/// One side of a game, as seen by the game driver.
#[async_trait]
pub trait Connector: Send {
    /// Find out what color this side plays.
    fn color(&self) -> Color;

    /// Choose a move in `state`, where it is this side's turn and at least one move is legal.
    /// May take arbitrarily long: a human is typing, or a search is running.
    async fn choose_move(&mut self, state: &GameState) -> Result<Move, ConnectorError>;

    /// Hear about a ply by either side. `None` is a pass.
    fn observe(&mut self, _color: Color, _mv: Option<Move>) {}
}
