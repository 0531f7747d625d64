//! The two sides of the game and the contents of a single board cell.

use crate::error::ParseColorError;
use std::fmt::{self, Display, Formatter};

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Dark,
    Light,
}

impl Default for Color {
    /// Gets the starting player (dark).
    fn default() -> Self {
        Self::Dark
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Color::Dark => Color::Light,
            Color::Light => Color::Dark,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Color::Dark => f.write_str("Dark"),
            Color::Light => f.write_str("Light"),
        }
    }
}

/// Parse a color name. Accepts "dark"/"light" and the conventional "black"/"white",
/// in any case, or their first letters.
impl std::str::FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" | "d" | "black" | "b" => Ok(Color::Dark),
            "light" | "l" | "white" | "w" => Ok(Color::Light),
            _ => Err(ParseColorError),
        }
    }
}

/// The contents of one board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Dark,
    Light,
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Dark => Cell::Dark,
            Color::Light => Cell::Light,
        }
    }
}

impl Cell {
    /// The color occupying this cell, if any.
    #[inline]
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Dark => Some(Color::Dark),
            Cell::Light => Some(Color::Light),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Grid symbol used when printing boards.
    pub(crate) fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Dark => '#',
            Cell::Light => 'O',
        }
    }

    /// Parse a grid symbol. Several common spellings are accepted for each side.
    pub(crate) fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' | '-' => Some(Cell::Empty),
            '#' | 'X' | 'x' | 'B' | 'b' | '*' => Some(Cell::Dark),
            'O' | 'o' | 'W' | 'w' => Some(Cell::Light),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_not_swaps_sides() {
        assert_eq!(!Color::Dark, Color::Light);
        assert_eq!(!Color::Light, Color::Dark);
        assert_eq!(Color::default(), Color::Dark);
    }

    #[test]
    fn color_from_str() {
        assert_eq!("Dark".parse(), Ok(Color::Dark));
        assert_eq!("w".parse(), Ok(Color::Light));
        assert_eq!("BLACK".parse(), Ok(Color::Dark));
        assert_eq!("grey".parse::<Color>(), Err(ParseColorError));
    }

    #[test]
    fn cell_symbols_round_trip() {
        for cell in [Cell::Empty, Cell::Dark, Cell::Light] {
            assert_eq!(Cell::from_symbol(cell.symbol()), Some(cell));
        }
        assert_eq!(Cell::from_symbol('?'), None);
    }
}
