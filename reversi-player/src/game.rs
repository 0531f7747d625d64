//! Runs a game between two [`Connector`]s.

use crate::config::{GameMode, PlayerConfig};
use crate::connectors::{Connector, ConsoleConnector, EngineConnector};
use crate::engine::Engine;
use crate::error::ConnectorError;
use reversi_rules::{Color, GameState, Move};
use std::fmt;
use tracing::{debug, info, warn};

/// One ply of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ply {
    Place(Color, Move),
    Pass(Color),
}

impl fmt::Display for Ply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ply::Place(_, mv) => write!(f, "{}", mv),
            Ply::Pass(_) => f.write_str("PASS"),
        }
    }
}

/// How a game ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOutcome {
    pub final_state: GameState,
    pub plies: Vec<Ply>,
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Color> {
        self.final_state.winner()
    }

    pub fn count_pieces(&self, color: Color) -> u32 {
        self.final_state.count_pieces(color)
    }
}

/// Play a game from the starting position until neither side can move.
///
/// A side with no legal move passes automatically, without being asked. Moves offered by
/// a connector are checked before they are played.
pub async fn play_game(
    dark: &mut dyn Connector,
    light: &mut dyn Connector,
) -> Result<GameOutcome, ConnectorError> {
    debug_assert_eq!(dark.color(), Color::Dark);
    debug_assert_eq!(light.color(), Color::Light);

    let mut state = GameState::default();
    let mut plies = Vec::new();

    while !state.is_terminal() {
        let mover = state.turn();

        if !state.has_legal_moves(mover) {
            info!(color = %mover, "no legal move, passing");
            state.pass();
            plies.push(Ply::Pass(mover));
            dark.observe(mover, None);
            light.observe(mover, None);
            continue;
        }

        let connector: &mut dyn Connector = match mover {
            Color::Dark => &mut *dark,
            Color::Light => &mut *light,
        };
        let mv = connector.choose_move(&state).await?;
        if !state.is_legal(mv, mover) {
            warn!(color = %mover, %mv, "connector offered an illegal move");
            return Err(ConnectorError::IllegalMove { color: mover, mv });
        }

        state.apply_move(mv);
        plies.push(Ply::Place(mover, mv));
        dark.observe(mover, Some(mv));
        light.observe(mover, Some(mv));
        info!(
            color = %mover,
            %mv,
            dark = state.count_pieces(Color::Dark),
            light = state.count_pieces(Color::Light),
            "move played"
        );
    }

    let outcome = GameOutcome {
        final_state: state,
        plies,
    };
    info!(
        winner = ?outcome.winner(),
        dark = outcome.count_pieces(Color::Dark),
        light = outcome.count_pieces(Color::Light),
        "game over"
    );
    Ok(outcome)
}

/// Build the connectors `config` asks for and play one game with them.
pub async fn play_configured(config: &PlayerConfig) -> Result<GameOutcome, ConnectorError> {
    let depth = config.search_depth();
    let machine =
        |color: Color| EngineConnector::new(Engine::new(color, depth).with_pruning(config.pruning()));
    debug!(mode = ?config.mode, depth, "starting game");

    let (mut dark, mut light) = match config.mode {
        GameMode::MachineVsMachine => (boxed(machine(Color::Dark)), boxed(machine(Color::Light))),
        GameMode::HumanVsMachine => match config.human_color {
            Color::Dark => (
                boxed(ConsoleConnector::new(Color::Dark)),
                boxed(machine(Color::Light)),
            ),
            Color::Light => (
                boxed(machine(Color::Dark)),
                boxed(ConsoleConnector::new(Color::Light)),
            ),
        },
    };

    play_game(dark.as_mut(), light.as_mut()).await
}

fn boxed(connector: impl Connector + 'static) -> Box<dyn Connector> {
    Box::new(connector)
}
