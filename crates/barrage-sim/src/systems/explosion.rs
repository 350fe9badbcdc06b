//! The explosion engine: radial blast damage, chained death blasts, and
//! timer-deferred crater carving.
//!
//! Exactly one explosion is displayed and timed at any moment; the rest
//! wait in FIFO order behind it. Damage from a shell burst lands the
//! instant it detonates, but its crater waits for the display window so
//! terrain mutation stays in lockstep with what the player sees. A dying
//! tank's blast does everything — crater and damage — when its own
//! window expires, which is what makes kills cascade across separate
//! detonations instead of inside one.

use std::collections::VecDeque;

use glam::Vec2;

use barrage_core::constants::{
    MS_PER_TICK, SHELL_BLAST_DISPLAY_MS, TANK_BLAST_DISPLAY_MS, TANK_BLAST_FUEL_BIAS,
};
use barrage_core::entities::{ExplosionSource, PendingExplosion};
use barrage_core::events::GameEvent;
use barrage_terrain::{carve_crater, TerrainField};

use crate::roster::TankRoster;
use crate::systems::flight::Impact;

/// The at-most-one-displayed explosion plus everything queued behind it.
#[derive(Debug, Clone, Default)]
pub struct ExplosionQueue {
    current: Option<PendingExplosion>,
    queued: VecDeque<PendingExplosion>,
}

impl ExplosionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing is displayed and nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.current.is_none() && self.queued.is_empty()
    }

    /// The explosion currently in its display window.
    pub fn current(&self) -> Option<&PendingExplosion> {
        self.current.as_ref()
    }

    fn push(&mut self, explosion: PendingExplosion) {
        if self.current.is_none() {
            self.current = Some(explosion);
        } else {
            self.queued.push_back(explosion);
        }
    }
}

/// Detonate a shell at its impact point: start the display window,
/// damage every surviving tank immediately, and queue death blasts for
/// any kills. The crater itself waits for the timer.
pub fn spawn_shell_burst(
    queue: &mut ExplosionQueue,
    roster: &mut TankRoster,
    impact: &Impact,
    events: &mut Vec<GameEvent>,
) {
    queue.push(PendingExplosion {
        x: impact.x,
        y: impact.y,
        radius: impact.strength,
        timeout_ms: SHELL_BLAST_DISPLAY_MS,
        elapsed_ms: 0.0,
        source: ExplosionSource::Shell,
    });
    events.push(GameEvent::Detonation {
        x: impact.x,
        y: impact.y,
        radius: impact.strength,
    });
    apply_blast_damage(roster, queue, impact.x, impact.y, impact.strength, events);
}

/// Radial damage with linear falloff, measured to the closest point of
/// each surviving tank's hull: `strength * (1 - distance/radius)`,
/// truncated to an integer, zero at or beyond the radius. Every tank is
/// scored against the pre-blast roster before any death is processed,
/// so one detonation cannot cascade into itself; kills queue their own
/// follow-up blast instead.
pub fn apply_blast_damage(
    roster: &mut TankRoster,
    queue: &mut ExplosionQueue,
    x: f32,
    y: f32,
    strength: f32,
    events: &mut Vec<GameEvent>,
) {
    let center = Vec2::new(x, y);
    let radius = strength;

    let hits: Vec<(usize, i32)> = roster
        .iter_active()
        .filter_map(|(index, tank)| {
            let distance = tank.bounds().closest_point(center).distance(center);
            if distance >= radius {
                return None;
            }
            let damage = (strength * (1.0 - distance / radius)) as i32;
            (damage > 0).then_some((index, damage))
        })
        .collect();

    for (index, damage) in hits {
        let Some(tank) = roster.get_mut(index) else {
            continue;
        };
        tank.health = (tank.health - damage).max(0);
        events.push(GameEvent::TankDamaged {
            tank: index,
            damage,
            remaining: tank.health,
        });

        if tank.health == 0 && tank.active {
            tank.active = false;
            let hull_center = tank.center();
            let blast_radius = tank.blast_strength * (tank.fuel + TANK_BLAST_FUEL_BIAS);
            log::info!("tank {index} ({}) destroyed", tank.name);
            events.push(GameEvent::TankDestroyed { tank: index });
            queue.push(PendingExplosion {
                x: hull_center.x,
                y: hull_center.y,
                radius: blast_radius,
                timeout_ms: TANK_BLAST_DISPLAY_MS,
                elapsed_ms: 0.0,
                source: ExplosionSource::Tank(index),
            });
        }
    }
}

/// Advance the displayed explosion's logical timer by one tick. On
/// expiry: carve the crater, let a tank death blast deal its damage
/// (possibly queueing further blasts), and promote the next in line.
pub fn run(
    queue: &mut ExplosionQueue,
    terrain: &mut TerrainField,
    roster: &mut TankRoster,
    events: &mut Vec<GameEvent>,
) {
    let Some(current) = queue.current.as_mut() else {
        return;
    };
    current.elapsed_ms += MS_PER_TICK;
    if current.elapsed_ms < current.timeout_ms {
        return;
    }
    let Some(explosion) = queue.current.take() else {
        return;
    };

    carve_crater(terrain, explosion.x, explosion.y, explosion.radius);

    // Promote the next queued blast first: chain damage below may push
    // more, and those belong behind it.
    queue.current = queue.queued.pop_front();

    if let ExplosionSource::Tank(_) = explosion.source {
        events.push(GameEvent::Detonation {
            x: explosion.x,
            y: explosion.y,
            radius: explosion.radius,
        });
        apply_blast_damage(roster, queue, explosion.x, explosion.y, explosion.radius, events);
    }
}
