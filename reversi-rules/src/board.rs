//! The 8x8 grid and the directional run scan shared by every rule.
//!
//! Legality, capture counting and move application all go through [`Board::run_length`],
//! so they cannot disagree about which pieces a placement flips.

use crate::disc::{Cell, Color};
use crate::error::ParseBoardError;
use crate::location::Move;
use crate::{utils, EDGE_LENGTH, NUM_SPACES};
use std::fmt;

/// The eight ray directions as `(d_row, d_col)` steps.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// An 8x8 grid of cells, indexed `[row][col]` with row 0 at the top.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [[Cell; EDGE_LENGTH]; EDGE_LENGTH],
}

impl Default for Board {
    /// Gets the starting layout.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A board with no pieces on it.
    pub const fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH],
        }
    }

    /// The starting layout: Dark on D4 and E5, Light on E4 and D5.
    pub const fn new() -> Self {
        let mut cells = [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH];
        cells[3][3] = Cell::Dark;
        cells[3][4] = Cell::Light;
        cells[4][3] = Cell::Light;
        cells[4][4] = Cell::Dark;
        Self { cells }
    }

    #[inline]
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.row()][mv.col()]
    }

    #[inline]
    pub fn set(&mut self, mv: Move, cell: Cell) {
        self.cells[mv.row()][mv.col()] = cell;
    }

    /// Look up a cell by raw coordinates. Returns `None` off the board.
    #[inline]
    pub fn cell_at(&self, row: usize, col: usize) -> Option<Cell> {
        Move::new(row, col).ok().map(|mv| self.get(mv))
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Count the cells holding `cell`.
    pub fn count(&self, cell: Cell) -> u32 {
        self.cells().filter(|&c| c == cell).count() as u32
    }

    #[inline]
    pub fn count_empty(&self) -> u32 {
        self.count(Cell::Empty)
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.count_empty() == 0
    }

    /// Length of the opposing run that `color` would flip by placing at `origin`,
    /// scanning outward along `direction`.
    ///
    /// The run must be one or more contiguous opposing pieces closed by a `color` piece.
    /// If the ray reaches an empty cell or the edge first, nothing flips and this is 0.
    /// The origin cell itself is not inspected.
    pub fn run_length(&self, origin: Move, direction: (isize, isize), color: Color) -> usize {
        let own = Cell::from(color);
        let opponent = Cell::from(!color);

        let mut length = 0;
        let mut cursor = origin.step(direction);
        while let Some(mv) = cursor {
            match self.get(mv) {
                cell if cell == opponent => length += 1,
                cell if cell == own => return length,
                _ => return 0,
            }
            cursor = mv.step(direction);
        }

        // Ran off the edge without closing the run.
        0
    }

    /// Flip the run measured by [`Board::run_length`] along one direction.
    pub(crate) fn flip_run(&mut self, origin: Move, direction: (isize, isize), color: Color) {
        let length = self.run_length(origin, direction, color);
        let mut cursor = origin;
        for _ in 0..length {
            match cursor.step(direction) {
                Some(mv) => {
                    self.set(mv, Cell::from(color));
                    cursor = mv;
                }
                None => break,
            }
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(self.cells().map(Cell::symbol), f)
    }
}

/// Parse a board from 64 row-major cell symbols. Whitespace is ignored, so
/// both a single line and an 8-line grid work.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != NUM_SPACES {
            return Err(ParseBoardError::WrongLength {
                found: symbols.len(),
            });
        }

        let mut board = Board::empty();
        for (mv, &symbol) in Move::all().zip(symbols.iter()) {
            let cell = Cell::from_symbol(symbol).ok_or(ParseBoardError::BadSymbol { symbol })?;
            board.set(mv, cell);
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(row: usize, col: usize) -> Move {
        Move::new(row, col).unwrap()
    }

    #[test]
    fn starting_layout() {
        let board = Board::new();
        assert_eq!(board.get(mv(3, 3)), Cell::Dark);
        assert_eq!(board.get(mv(3, 4)), Cell::Light);
        assert_eq!(board.get(mv(4, 3)), Cell::Light);
        assert_eq!(board.get(mv(4, 4)), Cell::Dark);
        assert_eq!(board.count(Cell::Empty), 60);
    }

    #[test]
    fn cell_at_rejects_off_board() {
        let board = Board::new();
        assert_eq!(board.cell_at(3, 4), Some(Cell::Light));
        assert_eq!(board.cell_at(8, 0), None);
        assert_eq!(board.cell_at(0, 100), None);
    }

    #[test]
    fn run_length_closed_and_open() {
        let board = Board::new();
        // Dark at (2,4) looking south: Light (3,4), then Dark (4,4).
        assert_eq!(board.run_length(mv(2, 4), (1, 0), Color::Dark), 1);
        // Dark at (2,3) looking south meets its own piece at (3,3) straight away.
        assert_eq!(board.run_length(mv(2, 3), (1, 0), Color::Dark), 0);
        // Light at (2,4) looking south hits its own piece first.
        assert_eq!(board.run_length(mv(2, 4), (1, 0), Color::Light), 0);
    }

    #[test]
    fn run_length_off_edge_is_zero() {
        let board: Board = "\
            OOOOOOO.
            ........
            ........
            ........
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();
        assert_eq!(board.run_length(mv(0, 7), (0, -1), Color::Dark), 0);
        assert_eq!(board.run_length(mv(0, 7), (0, -1), Color::Light), 0);
    }

    #[test]
    fn flip_run_converts_pieces() {
        let mut board: Board = "#OOO.... ........ ........ ........ ........ ........ ........ ........"
            .parse()
            .unwrap();
        board.flip_run(mv(0, 4), (0, -1), Color::Dark);
        assert_eq!(board.count(Cell::Dark), 4);
        assert_eq!(board.count(Cell::Light), 0);
    }

    #[test]
    fn parse_board_errors() {
        assert_eq!(
            "...".parse::<Board>(),
            Err(ParseBoardError::WrongLength { found: 3 })
        );
        let bad = format!("{}?", ".".repeat(63));
        assert_eq!(
            bad.parse::<Board>(),
            Err(ParseBoardError::BadSymbol { symbol: '?' })
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        let board = Board::new();
        let printed = board.to_string();
        let symbols: String = printed
            .lines()
            .skip(1)
            .map(|line| line.split_whitespace().skip(1).collect::<String>())
            .collect();
        assert_eq!(symbols.parse::<Board>(), Ok(board));
    }
}
