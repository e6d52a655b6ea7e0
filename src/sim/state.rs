//! Game state and turn input types
//!
//! `GameState` is a plain value: the controller never patches one in place,
//! each turn returns a fresh state.

use serde::{Deserialize, Deserializer, Serialize, de};

use super::grid::{Grid, Tile};
use super::terminal::is_terminal;
use crate::consts::STARTING_VALUE;

/// Slide direction for one turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Parse a direction name or key alias (case-insensitive)
    ///
    /// Accepts full names plus `a/d/w/s` and `h/l/k/j`.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "left" | "a" | "h" => Some(Direction::Left),
            "right" | "d" | "l" => Some(Direction::Right),
            "up" | "w" | "k" => Some(Direction::Up),
            "down" | "s" | "j" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Clockwise quarter turns `(into, back)` that map this direction onto
    /// slide-left and back again
    pub fn quarter_turns(&self) -> (u8, u8) {
        match self {
            Direction::Left => (0, 0),
            Direction::Right => (2, 2),
            Direction::Up => (3, 1),
            Direction::Down => (1, 3),
        }
    }
}

/// Turn state machine phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Moves are accepted
    Playing,
    /// No move can change the grid; inputs are ignored until a new game
    Over,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub grid: Grid,
    /// Sum of every tile produced by a merge
    pub score: u64,
    pub is_over: bool,
    /// Value given to every spawned tile
    #[serde(deserialize_with = "positive_tile")]
    pub starting_value: Tile,
}

fn positive_tile<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Tile, D::Error> {
    let value = Tile::deserialize(deserializer)?;
    if value == 0 {
        return Err(de::Error::custom("starting_value must be > 0"));
    }
    Ok(value)
}

impl GameState {
    /// Wrap an arbitrary grid, deriving `is_over` from its contents.
    ///
    /// Spawns use [`STARTING_VALUE`]; see [`GameState::with_starting_value`].
    pub fn from_grid(grid: Grid, score: u64) -> Self {
        let is_over = is_terminal(&grid);
        Self {
            grid,
            score,
            is_over,
            starting_value: STARTING_VALUE,
        }
    }

    pub fn with_starting_value(mut self, starting_value: Tile) -> Self {
        assert!(starting_value > 0, "starting value must be positive");
        self.starting_value = starting_value;
        self
    }

    pub fn phase(&self) -> GamePhase {
        if self.is_over {
            GamePhase::Over
        } else {
            GamePhase::Playing
        }
    }

    pub fn max_tile(&self) -> Tile {
        self.grid.max_tile()
    }
}
