//! Game settings
//!
//! Board shape, spawn value and an optional fixed seed. Stored as JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE, STARTING_VALUE};
use crate::sim::Tile;

/// Errors from loading or validating [`Settings`].
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Board edge length outside the supported range.
    #[error("Board size must be {min}-{max}, got {0}", min = MIN_BOARD_SIZE, max = MAX_BOARD_SIZE)]
    InvalidBoardSize(usize),

    /// Spawned tiles must be non-zero.
    #[error("Starting value must be > 0")]
    InvalidStartingValue,

    #[error("Failed to read or write settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Edge length of the square board
    pub board_size: usize,
    /// Value of every spawned tile
    pub starting_value: Tile,
    /// Fixed RNG seed; `None` picks a fresh one per session
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            starting_value: STARTING_VALUE,
            seed: None,
        }
    }
}

impl Settings {
    /// Default board with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Check that the settings describe a playable board
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(SettingsError::InvalidBoardSize(self.board_size));
        }
        if self.starting_value == 0 {
            return Err(SettingsError::InvalidStartingValue);
        }
        Ok(())
    }

    /// Parse and validate settings from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Write settings to a JSON file
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        fs::write(path.as_ref(), self.to_json()?)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}
