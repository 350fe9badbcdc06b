//! Snapshot system: builds the read-only per-tick view of the round.
//!
//! This system never modifies simulation state.

use barrage_core::entities::Projectile;
use barrage_core::enums::{RoundOutcome, RoundPhase};
use barrage_core::events::GameEvent;
use barrage_core::state::{ExplosionView, ProjectileView, RoundSnapshot, TankView};
use barrage_core::types::SimTime;
use barrage_terrain::TerrainField;

use crate::roster::TankRoster;
use crate::systems::explosion::ExplosionQueue;
use crate::systems::turns::TurnState;

pub fn build_snapshot(
    terrain: &TerrainField,
    roster: &TankRoster,
    projectile: &Option<Projectile>,
    explosions: &ExplosionQueue,
    turn: &TurnState,
    time: &SimTime,
    phase: RoundPhase,
    outcome: Option<RoundOutcome>,
    events: Vec<GameEvent>,
) -> RoundSnapshot {
    RoundSnapshot {
        time: *time,
        phase,
        heights: terrain.heights.clone(),
        tanks: roster.tanks().iter().map(TankView::from).collect(),
        projectile: projectile.as_ref().map(ProjectileView::from),
        explosion: explosions.current().map(ExplosionView::from),
        active_tank: turn.active,
        turn_banner_ms: turn.banner_ms,
        outcome,
        events,
    }
}
