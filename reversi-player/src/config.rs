//! Command-line configuration for a game.

use clap::{Parser, ValueEnum};
use reversi_rules::Color;
use reversi_search::Pruning;

/// Machine strength, as a fixed search depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Medium
    }
}

impl Difficulty {
    pub const fn depth(self) -> u32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
        }
    }
}

/// Who sits on each side of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum GameMode {
    #[value(alias = "human-ai")]
    HumanVsMachine,
    #[value(alias = "ai-ai")]
    MachineVsMachine,
}

impl Default for GameMode {
    fn default() -> Self {
        Self::HumanVsMachine
    }
}

#[derive(Parser, Clone, Debug, PartialEq, Eq)]
#[command(name = "reversi", about = "Play Othello against a minimax engine")]
pub struct PlayerConfig {
    #[arg(long, value_enum, default_value_t = GameMode::HumanVsMachine)]
    pub mode: GameMode,

    #[arg(short, long, value_enum, default_value_t = Difficulty::Medium)]
    pub difficulty: Difficulty,

    /// Search depth; overrides --difficulty
    #[arg(long)]
    pub depth: Option<u32>,

    /// Color played by the human in human-vs-machine games
    #[arg(long, default_value_t = Color::Dark)]
    pub human_color: Color,

    /// Search every node instead of pruning with alpha-beta
    #[arg(long)]
    pub no_pruning: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            depth: None,
            human_color: Color::Dark,
            no_pruning: false,
        }
    }
}

impl PlayerConfig {
    /// The depth every engine in this game searches to.
    pub fn search_depth(&self) -> u32 {
        self.depth.unwrap_or_else(|| self.difficulty.depth())
    }

    pub fn pruning(&self) -> Pruning {
        if self.no_pruning {
            Pruning::None
        } else {
            Pruning::AlphaBeta
        }
    }
}
