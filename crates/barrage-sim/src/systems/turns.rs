//! Turn sequencing: round-robin over surviving tanks.

use barrage_core::constants::{MS_PER_TICK, TURN_BANNER_MS};
use barrage_core::events::GameEvent;

use crate::roster::TankRoster;

/// Whose turn it is, plus the announcement banner countdown. The banner
/// is advisory display state; input is accepted while it runs.
#[derive(Debug, Clone)]
pub struct TurnState {
    pub active: usize,
    pub banner_ms: f32,
}

impl TurnState {
    pub fn new() -> Self {
        Self {
            active: 0,
            banner_ms: TURN_BANNER_MS,
        }
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hand the turn to the next surviving tank, scanning forward
/// cyclically. With no other survivor the index stays put — game-over
/// detection takes it from there.
pub fn advance(turn: &mut TurnState, roster: &TankRoster, events: &mut Vec<GameEvent>) {
    if let Some(next) = roster.next_active_after(turn.active) {
        turn.active = next;
        turn.banner_ms = TURN_BANNER_MS;
        events.push(GameEvent::TurnStarted { tank: next });
        log::debug!("turn passes to tank {next}");
    }
}

/// Count the announcement banner down.
pub fn tick_banner(turn: &mut TurnState) {
    turn.banner_ms = (turn.banner_ms - MS_PER_TICK).max(0.0);
}
