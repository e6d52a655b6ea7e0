//! Host-facing game session
//!
//! Owns the current [`GameState`], the seeded RNG and the settings, so a
//! renderer only forwards inputs and reads the state back.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::state::{Direction, GameState};
use super::turn::{self, TurnOutcome};
use crate::settings::{Settings, SettingsError};

#[derive(Debug, Clone)]
pub struct Session {
    settings: Settings,
    seed: u64,
    rng: Pcg32,
    state: GameState,
}

impl Session {
    /// Validate `settings` and start the first game.
    ///
    /// Without a configured seed a random one is drawn and logged so the run
    /// can be replayed.
    pub fn new(settings: Settings) -> Result<Self, SettingsError> {
        settings.validate()?;

        let seed = settings.seed.unwrap_or_else(rand::random);
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = turn::new_game(settings.board_size, settings.starting_value, &mut rng);

        log::info!(
            "Session started: {0}x{0} board, starting value {1}, seed {2}",
            settings.board_size,
            settings.starting_value,
            seed
        );

        Ok(Self {
            settings,
            seed,
            rng,
            state,
        })
    }

    /// Replace the current game with a fresh one (RNG stream continues)
    pub fn new_game(&mut self) -> &GameState {
        self.state = turn::new_game(
            self.settings.board_size,
            self.settings.starting_value,
            &mut self.rng,
        );
        log::info!("New game");
        &self.state
    }

    /// Apply one direction input and report the turn
    pub fn play(&mut self, direction: Direction) -> TurnOutcome {
        let outcome = turn::play_turn(&self.state, direction, &mut self.rng);
        if outcome.changed {
            self.state = outcome.state.clone();
            if self.state.is_over {
                log::info!("Game over with score {}", self.state.score);
            }
        }
        outcome
    }

    /// Apply one direction input, returning the resulting state
    pub fn apply_move(&mut self, direction: Direction) -> &GameState {
        self.play(direction);
        &self.state
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Seed the session RNG was created from
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
