//! Simulation entities: tanks, shells, and queued explosions.
//!
//! These are plain data structs with a few geometry helpers; the game
//! logic that mutates them lives in the simulation systems.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::types::Aabb;

/// One combatant. Position is the top-left corner of the hull; `y` is
/// derived state — the hull rests on the terrain surface under its
/// footprint and sinks when the ground is carved away beneath it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tank {
    pub name: String,
    pub color: [u8; 3],
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub cannon_len: f32,
    /// Aim angle in degrees: 0 = right, 90 = up, 180 = left.
    pub aim_angle_deg: f32,
    /// Cannon power 0..=100; maps to muzzle speed.
    pub cannon_power: f32,
    pub health: i32,
    pub max_health: i32,
    /// Shell blast radius and maximum damage for this tank's shots.
    pub strength: f32,
    /// Base strength of the blast this tank produces when destroyed.
    pub blast_strength: f32,
    /// Movement fuel gauge, 0..=1.
    pub fuel: f32,
    /// Dead tanks stay in the roster but are excluded from targeting,
    /// collision, damage, and turn rotation.
    pub active: bool,
}

impl Tank {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }

    /// Unit vector along the barrel. Up is negative y.
    pub fn aim_vector(&self) -> Vec2 {
        let rad = self.aim_angle_deg.to_radians();
        Vec2::new(rad.cos(), -rad.sin())
    }

    /// Muzzle position: the pivot offset by the barrel length along the
    /// aim direction. Shells spawn here.
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.x, self.y) + self.aim_vector() * self.cannon_len
    }
}

/// A shell in flight. The engine enforces at most one live instance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Blast radius and maximum damage on detonation.
    pub strength: f32,
}

/// What produced an explosion. Tank death blasts deal their damage when
/// their display timer expires, which is what lets kills chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplosionSource {
    Shell,
    Tank(usize),
}

/// An explosion waiting out its display window. Exactly one is timed at
/// any moment; the rest queue behind it in FIFO order so chained
/// detonations resolve one at a time instead of overwriting each other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PendingExplosion {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub timeout_ms: f32,
    pub elapsed_ms: f32,
    pub source: ExplosionSource,
}
