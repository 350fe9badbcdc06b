//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

/// Milliseconds of logical time per tick. Display timers (explosion
/// holds, turn banner) count in these, never in wall clock.
pub const MS_PER_TICK: f32 = 1000.0 / TICK_RATE as f32;

// --- Field geometry ---

/// Field width in pixels; one terrain column per pixel.
pub const FIELD_WIDTH: usize = 1000;

/// Field height in pixels. A shell at or below this is gone for good.
pub const FIELD_HEIGHT: f32 = 720.0;

/// Terrain baseline: the y coordinate of height zero. A column of
/// height h is solid from FIELD_BOTTOM - h down to FIELD_BOTTOM.
pub const FIELD_BOTTOM: f32 = 615.0;

/// Top of the playable area (frame margin).
pub const FIELD_TOP: f32 = 5.0;

// --- Ballistics ---

/// Gravitational acceleration (px/tick²). Positive y is down.
pub const GRAVITY: f32 = 0.5;

/// Divisor mapping cannon power [0,100] to muzzle speed (px/tick).
pub const POWER_TO_SPEED: f32 = 2.4;

// --- Tanks ---

/// Tank footprint in pixels.
pub const TANK_WIDTH: f32 = 24.0;
pub const TANK_HEIGHT: f32 = 12.0;

/// Barrel length: how far the muzzle sits from the tank pivot.
pub const CANNON_LENGTH: f32 = 20.0;

/// Aim angle bounds in degrees (0 = right, 90 = up, 180 = left).
pub const AIM_MIN_DEG: f32 = 0.0;
pub const AIM_MAX_DEG: f32 = 180.0;

/// Aim change per input application (degrees).
pub const AIM_STEP_DEG: f32 = 1.0;

/// Cannon power bounds and change per input application.
pub const POWER_MIN: f32 = 0.0;
pub const POWER_MAX: f32 = 100.0;
pub const POWER_STEP: f32 = 0.1;

/// Horizontal crawl per move input (pixels).
pub const MOVE_STEP: f32 = 0.1;

/// Fuel burned per move input. Fuel is a 0..=1 gauge.
pub const MOVE_FUEL_COST: f32 = 0.001;

/// How fast an unsupported tank sinks toward the surface (px/tick).
pub const TANK_FALL_RATE: f32 = 1.0;

/// Default shell blast radius and maximum damage.
pub const SHELL_STRENGTH: f32 = 15.0;

/// Base strength of a destroyed tank's death blast.
pub const TANK_BLAST_STRENGTH: f32 = 70.0;

/// Fuel bias in the death-blast radius: radius = strength * (fuel + bias).
pub const TANK_BLAST_FUEL_BIAS: f32 = 0.7;

/// Starting aim and power for a freshly placed tank.
pub const DEFAULT_AIM_DEG: f32 = 45.0;
pub const DEFAULT_POWER: f32 = 30.0;

// --- Display timers ---

/// How long a shell burst is held on screen before the crater applies (ms).
pub const SHELL_BLAST_DISPLAY_MS: f32 = 333.0;

/// How long a tank death blast is held on screen (ms).
pub const TANK_BLAST_DISPLAY_MS: f32 = 600.0;

/// Turn announcement banner duration (ms). Advisory display state only;
/// input is accepted while it runs.
pub const TURN_BANNER_MS: f32 = 1500.0;

// --- Terrain generation ---

/// Default generation bounds for terrain column heights.
pub const TERRAIN_MIN_HEIGHT: i32 = 10;
pub const TERRAIN_MAX_HEIGHT: i32 = 540;

/// Horizontal noise scale: columns per unit of noise space.
pub const NOISE_SCALE: f64 = 360.0;
