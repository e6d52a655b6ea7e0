//! Tile Merge - rules engine for a sliding tile-merge puzzle
//!
//! Core modules:
//! - `sim`: Deterministic game rules (grid, slide-merge, spawning, turns)
//! - `settings`: Board configuration with validation and JSON load/save
//!
//! Rendering and input translation live outside this crate. A host calls
//! [`sim::new_game`] / [`sim::apply_move`] (or drives a [`sim::Session`]) and
//! renders the returned [`sim::GameState`].

pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};
pub use sim::{Direction, GamePhase, GameState, Grid, Session, Tile};

/// Game configuration constants
pub mod consts {
    use crate::sim::Tile;

    /// Default board edge length (4x4)
    pub const BOARD_SIZE: usize = 4;
    /// Smallest supported board edge length
    pub const MIN_BOARD_SIZE: usize = 2;
    /// Largest supported board edge length
    pub const MAX_BOARD_SIZE: usize = 8;

    /// Value of every freshly spawned tile; merges produce `STARTING_VALUE * 2^k`
    pub const STARTING_VALUE: Tile = 3;

    /// Tiles placed on an empty board by "new game"
    pub const INITIAL_TILES: usize = 2;
}
