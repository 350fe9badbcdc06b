//! Headless simulation engine for Barrage.
//!
//! Owns the terrain, tank roster, shell, and explosion queue; runs the
//! per-tick systems at a fixed rate and produces `RoundSnapshot`s for
//! whatever presentation layer sits on top.

pub mod engine;
pub mod roster;
pub mod round_setup;
pub mod systems;

pub use barrage_core as core;
pub use engine::SimulationEngine;
