//! Tank support: hulls left hanging by a fresh crater sink toward the
//! surface, one pixel per tick.
//!
//! Tanks only ever fall. Collapse can refill a column to above a
//! resting hull; the tank is simply buried and keeps fighting.

use barrage_core::constants::{FIELD_BOTTOM, TANK_FALL_RATE};
use barrage_terrain::TerrainField;

use crate::roster::TankRoster;

pub fn run(roster: &mut TankRoster, terrain: &TerrainField) {
    for tank in roster.tanks_mut() {
        if !tank.active {
            continue;
        }
        let ground = terrain.ground_height_under(tank.x, tank.x + tank.width);
        let surface = FIELD_BOTTOM - ground as f32;
        if tank.y + tank.height < surface {
            tank.y = (tank.y + TANK_FALL_RATE).min(surface - tank.height);
        }
    }
}
