//! Per-tick simulation systems, run in a fixed order by the engine.

pub mod collision;
pub mod explosion;
pub mod flight;
pub mod input;
pub mod settle;
pub mod snapshot;
pub mod turns;
