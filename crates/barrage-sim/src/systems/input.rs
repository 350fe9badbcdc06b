//! Input application: aim, power, movement, and fire for the tank that
//! holds the turn.
//!
//! Forgiving-input policy throughout: out-of-range adjustments clamp,
//! and impossible requests (firing with a shell up, moving on empty
//! fuel) are plain no-ops.

use barrage_core::commands::PlayerCommand;
use barrage_core::constants::{
    AIM_MAX_DEG, AIM_MIN_DEG, AIM_STEP_DEG, MOVE_FUEL_COST, MOVE_STEP, POWER_MAX, POWER_MIN,
    POWER_STEP, POWER_TO_SPEED,
};
use barrage_core::entities::{Projectile, Tank};
use barrage_core::events::GameEvent;
use barrage_terrain::TerrainField;

use crate::roster::TankRoster;
use crate::round_setup;

/// Apply one command to the active tank.
pub fn apply(
    command: &PlayerCommand,
    roster: &mut TankRoster,
    terrain: &TerrainField,
    projectile: &mut Option<Projectile>,
    active: usize,
    events: &mut Vec<GameEvent>,
) {
    let Some(tank) = roster.get_mut(active) else {
        return;
    };
    if !tank.active {
        return;
    }

    match command {
        PlayerCommand::AimLeft => {
            tank.aim_angle_deg = (tank.aim_angle_deg + AIM_STEP_DEG).min(AIM_MAX_DEG);
        }
        PlayerCommand::AimRight => {
            tank.aim_angle_deg = (tank.aim_angle_deg - AIM_STEP_DEG).max(AIM_MIN_DEG);
        }
        PlayerCommand::PowerUp => {
            tank.cannon_power = (tank.cannon_power + POWER_STEP).min(POWER_MAX);
        }
        PlayerCommand::PowerDown => {
            tank.cannon_power = (tank.cannon_power - POWER_STEP).max(POWER_MIN);
        }
        PlayerCommand::MoveLeft => crawl(tank, terrain, -MOVE_STEP),
        PlayerCommand::MoveRight => crawl(tank, terrain, MOVE_STEP),
        PlayerCommand::Fire => {
            if projectile.is_none() {
                *projectile = Some(fire(tank));
                events.push(GameEvent::ShotFired { tank: active });
                log::debug!(
                    "tank {active} fired: angle={:.0} power={:.1}",
                    tank.aim_angle_deg,
                    tank.cannon_power
                );
            }
        }
        // Round control, handled by the engine before dispatch.
        PlayerCommand::Abort => {}
    }
}

/// Crawl sideways, burning fuel, and re-seat on the surface. Dry tanks
/// don't move; the hull clamps inside the field.
fn crawl(tank: &mut Tank, terrain: &TerrainField, dx: f32) {
    if tank.fuel <= 0.0 {
        return;
    }
    tank.fuel = (tank.fuel - MOVE_FUEL_COST).max(0.0);
    tank.x = (tank.x + dx).clamp(0.0, terrain.width() as f32 - tank.width);
    round_setup::seat_on_terrain(tank, terrain);
}

/// Build the shell leaving this tank's barrel: spawned at the muzzle,
/// with speed derived from cannon power.
fn fire(tank: &Tank) -> Projectile {
    let speed = tank.cannon_power / POWER_TO_SPEED;
    Projectile {
        pos: tank.muzzle(),
        vel: tank.aim_vector() * speed,
        strength: tank.strength,
    }
}
