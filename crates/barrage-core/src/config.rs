//! Round configuration and validation.
//!
//! A round refuses to start on bad input: the engine constructor runs
//! `RoundConfig::validate` and returns the error instead of producing
//! undefined terrain or an unwinnable roster. Past construction nothing
//! is fallible — runtime input is clamped or ignored instead.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{FIELD_BOTTOM, FIELD_WIDTH, TANK_WIDTH, TERRAIN_MAX_HEIGHT, TERRAIN_MIN_HEIGHT};

/// One combatant's starting state, as collected by the pre-game setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub color: [u8; 3],
    pub start_health: i32,
    /// Movement fuel gauge, 0..=1.
    pub start_fuel: f32,
    /// Left edge of the hull at spawn.
    pub start_x: f32,
}

/// Terrain generation bounds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TerrainConfig {
    pub min_height: i32,
    pub max_height: i32,
    /// Field width in columns.
    pub width: usize,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            min_height: TERRAIN_MIN_HEIGHT,
            max_height: TERRAIN_MAX_HEIGHT,
            width: FIELD_WIDTH,
        }
    }
}

/// Everything needed to start a round. Same config = same round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Terrain seed. Determinism flows from here.
    pub seed: u64,
    pub terrain: TerrainConfig,
    pub players: Vec<PlayerConfig>,
}

/// Reasons a round cannot start.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("a round needs at least 2 players, got {got}")]
    TooFewPlayers { got: usize },
    #[error("terrain width must be positive")]
    ZeroWidth,
    #[error("terrain height bounds {min}..{max} invalid (need 0 <= min < max <= {limit})")]
    BadHeightBounds { min: i32, max: i32, limit: i32 },
    #[error("player {index}: start health must be positive, got {health}")]
    BadStartHealth { index: usize, health: i32 },
    #[error("player {index}: start fuel {fuel} outside 0..=1")]
    BadStartFuel { index: usize, fuel: f32 },
    #[error("player {index}: start x {x} puts the hull outside the field")]
    StartOutOfField { index: usize, x: f32 },
}

impl RoundConfig {
    /// Build a config for the given players with default terrain and a
    /// randomly drawn seed, for callers that don't care which hill they
    /// fight on.
    pub fn with_random_seed(players: Vec<PlayerConfig>) -> Self {
        Self {
            seed: rand::random(),
            terrain: TerrainConfig::default(),
            players,
        }
    }

    /// Check the config against the field limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.len() < 2 {
            return Err(ConfigError::TooFewPlayers {
                got: self.players.len(),
            });
        }
        if self.terrain.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        let limit = FIELD_BOTTOM as i32;
        if self.terrain.min_height < 0
            || self.terrain.min_height >= self.terrain.max_height
            || self.terrain.max_height > limit
        {
            return Err(ConfigError::BadHeightBounds {
                min: self.terrain.min_height,
                max: self.terrain.max_height,
                limit,
            });
        }
        for (index, player) in self.players.iter().enumerate() {
            if player.start_health <= 0 {
                return Err(ConfigError::BadStartHealth {
                    index,
                    health: player.start_health,
                });
            }
            if !(0.0..=1.0).contains(&player.start_fuel) {
                return Err(ConfigError::BadStartFuel {
                    index,
                    fuel: player.start_fuel,
                });
            }
            if player.start_x < 0.0 || player.start_x + TANK_WIDTH > self.terrain.width as f32 {
                return Err(ConfigError::StartOutOfField {
                    index,
                    x: player.start_x,
                });
            }
        }
        Ok(())
    }
}
