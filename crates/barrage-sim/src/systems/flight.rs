//! Ballistic shell integration with sub-stepped collision testing.
//!
//! Each tick the shell's movement is divided into `max(|vx|, |vy|, 1)`
//! sub-steps, re-classifying collision after every one, so a fast shell
//! cannot tunnel through a thin ridge or a hull between samples.

use barrage_core::constants::GRAVITY;
use barrage_core::entities::Projectile;
use barrage_core::enums::CollisionOutcome;
use barrage_core::events::GameEvent;
use barrage_terrain::TerrainField;

use crate::roster::TankRoster;
use crate::systems::collision;

/// Where and how a shell's flight ended.
#[derive(Debug, Clone, Copy)]
pub struct Impact {
    pub x: f32,
    pub y: f32,
    pub strength: f32,
    pub outcome: CollisionOutcome,
}

/// Advance the live shell by one tick. Returns the terminal impact, if
/// any; the shell slot is cleared when one occurs. A shell above the
/// top edge keeps flying.
pub fn run(
    projectile: &mut Option<Projectile>,
    terrain: &TerrainField,
    roster: &TankRoster,
    events: &mut Vec<GameEvent>,
) -> Option<Impact> {
    let shell = projectile.as_mut()?;

    let steps = shell.vel.x.abs().max(shell.vel.y.abs()).max(1.0) as i32;
    let delta = shell.vel / steps as f32;

    let mut outcome = CollisionOutcome::NoCollision;
    for _ in 0..steps {
        shell.pos += delta;
        outcome = collision::classify(shell.pos.x, shell.pos.y, terrain, roster);
        if outcome != CollisionOutcome::NoCollision {
            break;
        }
    }
    shell.vel.y += GRAVITY;

    if !outcome.is_terminal() {
        return None;
    }

    let impact = Impact {
        x: shell.pos.x,
        y: shell.pos.y,
        strength: shell.strength,
        outcome,
    };
    events.push(GameEvent::ShellImpact {
        x: impact.x,
        y: impact.y,
        outcome,
    });
    log::debug!("shell down at ({:.1}, {:.1}): {:?}", impact.x, impact.y, outcome);
    *projectile = None;
    Some(impact)
}
