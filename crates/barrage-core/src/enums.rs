//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Result of classifying a shell position against the field bounds,
/// terrain, and tanks. Checks are ordered; first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionOutcome {
    /// Left the field sideways or below. The shot is spent.
    MissOffscreen,
    /// Above the top edge. Still in flight; gravity will bring it back.
    MissOffTop,
    /// Struck the terrain surface.
    HitTerrain,
    /// Struck a surviving tank's hull.
    HitTank,
    /// Nothing hit.
    NoCollision,
}

impl CollisionOutcome {
    /// Whether this outcome ends the shell's flight.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            CollisionOutcome::MissOffscreen | CollisionOutcome::HitTerrain | CollisionOutcome::HitTank
        )
    }

    /// Whether this outcome produces an explosion at the impact point.
    pub fn detonates(&self) -> bool {
        matches!(self, CollisionOutcome::HitTerrain | CollisionOutcome::HitTank)
    }
}

/// Top-level round state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// A live tank has the turn; input and physics are running.
    #[default]
    Playing,
    /// At most one tank survives (or the round was aborted).
    GameOver,
}

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Exactly one tank survived.
    Winner { tank: usize },
    /// Every remaining tank died in the same explosion chain.
    Draw,
    /// The round was cancelled from outside.
    Aborted,
}
