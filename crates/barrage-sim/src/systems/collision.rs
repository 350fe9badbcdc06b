//! Shell collision classification.

use glam::Vec2;

use barrage_core::constants::FIELD_HEIGHT;
use barrage_core::enums::CollisionOutcome;
use barrage_terrain::TerrainField;

use crate::roster::TankRoster;

/// Classify a shell position against the field bounds, the terrain
/// surface, and surviving tanks. Checks run in order; first match wins:
///
/// 1. off the sides or past the bottom → MissOffscreen
/// 2. above the top edge → MissOffTop (still in flight)
/// 3. at or below the terrain surface of the nearest column → HitTerrain
/// 4. inside an active tank's hull → HitTank
/// 5. otherwise → NoCollision
pub fn classify(x: f32, y: f32, terrain: &TerrainField, roster: &TankRoster) -> CollisionOutcome {
    if x < 0.0 || x >= terrain.width() as f32 || y >= FIELD_HEIGHT {
        return CollisionOutcome::MissOffscreen;
    }
    if y < 0.0 {
        return CollisionOutcome::MissOffTop;
    }

    let column = x.round() as i32;
    if y >= terrain.surface_y(column) {
        return CollisionOutcome::HitTerrain;
    }

    let point = Vec2::new(x, y);
    for (_, tank) in roster.iter_active() {
        if tank.bounds().contains(point) {
            return CollisionOutcome::HitTank;
        }
    }

    CollisionOutcome::NoCollision
}
