//! [`Connector`] for a human typing moves at a terminal.

use super::Connector;
use crate::error::ConnectorError;
use async_std::io::prelude::*;
use async_std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use async_trait::async_trait;
use reversi_rules::{Color, GameState, Move};
use tracing::warn;

/// Reads moves line by line, either as "E3" or as zero-indexed "row col".
/// Unparsable and illegal input is answered with the legal moves and asked for again.
pub struct ConsoleConnector<R = BufReader<Stdin>, W = Stdout> {
    color: Color,
    input: R,
    output: W,
}

impl ConsoleConnector {
    /// Play through the process's stdin and stdout.
    pub fn new(color: Color) -> Self {
        Self::with_io(color, BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R, W> ConsoleConnector<R, W> {
    pub fn with_io(color: Color, input: R, output: W) -> Self {
        Self {
            color,
            input,
            output,
        }
    }

    /// Take back the output stream, e.g. to inspect what was shown.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R, W> ConsoleConnector<R, W>
where
    W: Write + Unpin + Send,
{
    async fn say(&mut self, text: &str) -> Result<(), ConnectorError> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }
}

/// Parse "E3" or "2 4".
fn parse_move(line: &str) -> Option<Move> {
    if let Ok(mv) = line.parse() {
        return Some(mv);
    }

    let mut coords = line.split_whitespace().map(str::parse::<usize>);
    match (coords.next(), coords.next(), coords.next()) {
        (Some(Ok(row)), Some(Ok(col)), None) => Move::new(row, col).ok(),
        _ => None,
    }
}

#[async_trait]
impl<R, W> Connector for ConsoleConnector<R, W>
where
    R: BufRead + Unpin + Send,
    W: Write + Unpin + Send,
{
    fn color(&self) -> Color {
        self.color
    }

    async fn choose_move(&mut self, state: &GameState) -> Result<Move, ConnectorError> {
        let legal = state.moves_for(self.color);
        self.say(&format!("\n{}\n", state)).await?;

        loop {
            self.say(&format!("{} to move {}: ", self.color, legal))
                .await?;

            let mut line = String::new();
            if self.input.read_line(&mut line).await? == 0 {
                return Err(ConnectorError::InputClosed);
            }
            let line = line.trim();
            if line.eq_ignore_ascii_case("quit") {
                return Err(ConnectorError::InputClosed);
            }

            match parse_move(line) {
                Some(mv) if state.is_legal(mv, self.color) => return Ok(mv),
                Some(mv) => {
                    warn!(%mv, color = %self.color, "rejected illegal move");
                    self.say(&format!("{} is not legal here.\n", mv)).await?;
                }
                None => {
                    self.say("Cannot parse move. Enter e.g. E3, or \"2 4\" for row 2, column 4.\n")
                        .await?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_std::task;

    fn connector(input: &'static str) -> ConsoleConnector<BufReader<&'static [u8]>, Vec<u8>> {
        ConsoleConnector::with_io(Color::Dark, BufReader::new(input.as_bytes()), Vec::new())
    }

    #[test]
    fn parse_both_notations() {
        assert_eq!(parse_move("E3"), Move::new(2, 4).ok());
        assert_eq!(parse_move("2 4"), Move::new(2, 4).ok());
        assert_eq!(parse_move("2 9"), None);
        assert_eq!(parse_move("2 4 1"), None);
        assert_eq!(parse_move("hello"), None);
    }

    #[test]
    fn reprompts_until_legal() {
        let mut console = connector("zz\nA1\n2 4\n");
        let mv = task::block_on(console.choose_move(&GameState::default())).unwrap();
        assert_eq!(mv, Move::new(2, 4).unwrap());

        let shown = String::from_utf8(console.into_output()).unwrap();
        assert!(shown.contains("Cannot parse move"));
        assert!(shown.contains("A1 is not legal here"));
        assert!(shown.contains("Dark to move [E3, F4, C5, D6]"));
    }

    #[test]
    fn closed_input_ends_the_game() {
        let mut console = connector("A1\n");
        let err = task::block_on(console.choose_move(&GameState::default())).unwrap_err();
        assert!(matches!(err, ConnectorError::InputClosed));

        let mut console = connector("quit\n");
        let err = task::block_on(console.choose_move(&GameState::default())).unwrap_err();
        assert!(matches!(err, ConnectorError::InputClosed));
    }
}
