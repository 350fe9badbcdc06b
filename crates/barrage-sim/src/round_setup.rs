//! Roster construction for a new round.

use barrage_core::config::RoundConfig;
use barrage_core::constants::{
    CANNON_LENGTH, DEFAULT_AIM_DEG, DEFAULT_POWER, FIELD_BOTTOM, SHELL_STRENGTH,
    TANK_BLAST_STRENGTH, TANK_HEIGHT, TANK_WIDTH,
};
use barrage_core::entities::Tank;
use barrage_terrain::TerrainField;

use crate::roster::TankRoster;

/// Build the roster from a validated config, each tank seated on the
/// freshly generated surface.
pub fn build_roster(config: &RoundConfig, terrain: &TerrainField) -> TankRoster {
    let tanks = config
        .players
        .iter()
        .map(|player| {
            let mut tank = Tank {
                name: player.name.clone(),
                color: player.color,
                x: player.start_x,
                y: 0.0,
                width: TANK_WIDTH,
                height: TANK_HEIGHT,
                cannon_len: CANNON_LENGTH,
                aim_angle_deg: DEFAULT_AIM_DEG,
                cannon_power: DEFAULT_POWER,
                health: player.start_health,
                max_health: player.start_health,
                strength: SHELL_STRENGTH,
                blast_strength: TANK_BLAST_STRENGTH,
                fuel: player.start_fuel,
                active: true,
            };
            seat_on_terrain(&mut tank, terrain);
            tank
        })
        .collect();
    TankRoster::new(tanks)
}

/// Snap a tank so its hull rests on the tallest column under its
/// footprint.
pub fn seat_on_terrain(tank: &mut Tank, terrain: &TerrainField) {
    let ground = terrain.ground_height_under(tank.x, tank.x + tank.width);
    tank.y = FIELD_BOTTOM - tank.height - ground as f32;
}
