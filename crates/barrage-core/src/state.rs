//! Round state snapshot — the complete visible state handed to the
//! presentation layer after each tick.
//!
//! Snapshots are plain serializable data; a renderer may only read them
//! between ticks, never reach back into the simulation.

use serde::{Deserialize, Serialize};

use crate::entities::{PendingExplosion, Projectile, Tank};
use crate::enums::{RoundOutcome, RoundPhase};
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete per-tick view of a round.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub time: SimTime,
    pub phase: RoundPhase,
    /// Terrain silhouette: one height per column.
    pub heights: Vec<i32>,
    pub tanks: Vec<TankView>,
    /// The shell in flight, if any.
    pub projectile: Option<ProjectileView>,
    /// The explosion currently in its display window, if any.
    pub explosion: Option<ExplosionView>,
    /// Roster index of the tank holding the turn.
    pub active_tank: usize,
    /// Remaining turn announcement time (ms). Display hint only.
    pub turn_banner_ms: f32,
    /// Set once the phase is GameOver.
    pub outcome: Option<RoundOutcome>,
    /// Everything notable that happened this tick.
    pub events: Vec<GameEvent>,
}

/// A tank as the presentation layer sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TankView {
    pub name: String,
    pub color: [u8; 3],
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub aim_angle_deg: f32,
    pub cannon_power: f32,
    pub health: i32,
    pub max_health: i32,
    pub fuel: f32,
    pub active: bool,
}

impl From<&Tank> for TankView {
    fn from(tank: &Tank) -> Self {
        Self {
            name: tank.name.clone(),
            color: tank.color,
            x: tank.x,
            y: tank.y,
            width: tank.width,
            height: tank.height,
            aim_angle_deg: tank.aim_angle_deg,
            cannon_power: tank.cannon_power,
            health: tank.health,
            max_health: tank.max_health,
            fuel: tank.fuel,
            active: tank.active,
        }
    }
}

/// Shell position for drawing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileView {
    pub x: f32,
    pub y: f32,
}

impl From<&Projectile> for ProjectileView {
    fn from(shell: &Projectile) -> Self {
        Self {
            x: shell.pos.x,
            y: shell.pos.y,
        }
    }
}

/// Explosion overlay for drawing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExplosionView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl From<&PendingExplosion> for ExplosionView {
    fn from(explosion: &PendingExplosion) -> Self {
        Self {
            x: explosion.x,
            y: explosion.y,
            radius: explosion.radius,
        }
    }
}
