//! Destructible terrain for Barrage.
//!
//! A battlefield is a per-column height field: seeded fractal-noise
//! generation, crater carving, and gravity-consistent collapse.

pub use barrage_core as core;

pub mod crater;
pub mod field;
pub mod generate;

// Re-export key items for convenience.
pub use crater::carve_crater;
pub use field::TerrainField;
pub use generate::{generate_heights, scramble_seed};
