//! Deterministic rules module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Grids are values; slide and rotate return new grids
//! - Injected, seedable RNG only
//! - Row-major iteration order everywhere
//! - No rendering or platform dependencies

pub mod grid;
pub mod session;
pub mod slide;
pub mod spawn;
pub mod state;
pub mod terminal;
pub mod turn;

pub use grid::{Grid, Tile};
pub use session::Session;
pub use slide::{SlideOutcome, can_slide, slide, slide_left};
pub use spawn::spawn_tile;
pub use state::{Direction, GamePhase, GameState};
pub use terminal::{is_terminal, legal_moves};
pub use turn::{TurnOutcome, apply_move, new_game, play_turn};
