//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and applied at the next tick boundary. They act
//! on whichever tank holds the turn; out-of-range adjustments clamp and
//! impossible requests (firing with a shell already up, moving on empty
//! fuel) are silently ignored rather than rejected.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Raise the aim angle toward 180° (barrel swings left).
    AimLeft,
    /// Lower the aim angle toward 0° (barrel swings right).
    AimRight,
    /// Increase cannon power.
    PowerUp,
    /// Decrease cannon power.
    PowerDown,
    /// Crawl left. Costs fuel; ignored when the tank is dry.
    MoveLeft,
    /// Crawl right. Costs fuel; ignored when the tank is dry.
    MoveRight,
    /// Fire the cannon. Ignored while a shell is in flight.
    Fire,
    /// Cancel the round immediately.
    Abort,
}
