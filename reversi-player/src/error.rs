use derive_more::{Display, Error};
use reversi_rules::{Color, Move};
use std::io;

/// Why a game could not be played to the end.
#[derive(Debug, Display, Error)]
pub enum ConnectorError {
    #[display(fmt = "input closed before the game finished")]
    InputClosed,
    #[display(fmt = "failed to read input: {}", _0)]
    Io(io::Error),
    #[display(fmt = "{} had a legal move but offered none", color)]
    NoMove { color: Color },
    #[display(fmt = "{} played illegal move {}", color, mv)]
    IllegalMove { color: Color, mv: Move },
    #[display(fmt = "scripted moves ran out")]
    ScriptExhausted,
}

impl From<io::Error> for ConnectorError {
    fn from(err: io::Error) -> Self {
        ConnectorError::Io(err)
    }
}
