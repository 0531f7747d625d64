//! Connectors are the ways a side of the board can choose its moves.

mod connector;
mod console;
mod engine;
mod scripted;

pub use connector::Connector;
pub use console::ConsoleConnector;
pub use engine::EngineConnector;
pub use scripted::ScriptedConnector;
