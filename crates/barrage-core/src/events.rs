//! Events emitted by the simulation for presentation feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{CollisionOutcome, RoundOutcome};

/// Things the frontend may want to flash, shake, or play a sound for.
/// Tanks are identified by roster index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A shell left a tank's barrel.
    ShotFired { tank: usize },
    /// A shell's flight ended, one way or another.
    ShellImpact {
        x: f32,
        y: f32,
        outcome: CollisionOutcome,
    },
    /// An explosion went off.
    Detonation { x: f32, y: f32, radius: f32 },
    /// A tank took blast damage.
    TankDamaged {
        tank: usize,
        damage: i32,
        remaining: i32,
    },
    /// A tank's health reached zero; its death blast is queued.
    TankDestroyed { tank: usize },
    /// The turn passed to another tank.
    TurnStarted { tank: usize },
    /// The round ended.
    RoundOver { outcome: RoundOutcome },
}
