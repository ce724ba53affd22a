//! Uphill - a fixed-timestep 2D platformer physics core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion model, collision resolution, state)
//! - `tuning`: Data-driven physics configuration
//! - `driver`: Fixed-timestep accumulator and frame pump
//! - `input`: Edge-latching input boundary for keyboard/touch backends

pub mod driver;
pub mod input;
pub mod sim;
pub mod tuning;

pub use driver::FixedTimestep;
pub use input::InputLatch;
pub use sim::{JumpInput, Level, MoveDir, Obstacle, Player, Rect, SimState, TickInput, tick};
pub use tuning::{Tuning, TuningError};

/// Default physics constants
///
/// These are the baked-in tuning values; `Tuning::default()` mirrors them.
/// A JSON tuning file can override any subset at startup.
pub mod consts {
    /// Fixed simulation timestep in seconds (~60 Hz)
    pub const TIME_STEP: f32 = 0.016;
    /// Frame-time clamp, bounding catch-up work after a stall
    pub const MAX_FRAME_TIME: f32 = 0.25;

    /// Downward acceleration toward the fall-speed cap (px/s²)
    pub const GRAVITY: f32 = 2200.0;
    /// Terminal fall speed (px/s)
    pub const MAX_FALL_SPEED: f32 = 1000.0;

    /// Top horizontal run speed (px/s)
    pub const MAX_RUN_SPEED: f32 = 450.0;
    /// Acceleration toward the run target (px/s²)
    pub const RUN_ACCEL: f32 = 3000.0;
    /// Decay rate used instead of `RUN_ACCEL` while over the run cap
    pub const RUN_REDUCE: f32 = 1400.0;
    /// Deceleration with no input while grounded (px/s²)
    pub const FRICTION: f32 = 2500.0;
    /// Deceleration with no input while airborne (px/s²)
    pub const AIR_FRICTION: f32 = 500.0;
    /// Multiplier applied to the input-driven rate while airborne
    pub const AIR_ACCEL_MULT: f32 = 0.65;

    /// Initial jump velocity (negative = up)
    pub const JUMP_SPEED: f32 = -950.0;
    /// Window after launch during which holding jump sustains it (seconds)
    pub const VAR_JUMP_WINDOW: f32 = 0.2;
    /// Vertical-speed band around the arc apex where gravity is halved
    pub const HALF_GRAV_THRESHOLD: f32 = 40.0;

    /// Logical world width in pixels
    pub const WORLD_WIDTH: f32 = 1280.0;
    /// Logical world height in pixels
    pub const WORLD_HEIGHT: f32 = 720.0;
    /// How far below the world bottom a body may fall before respawning
    pub const RESPAWN_MARGIN: f32 = 100.0;

    /// Spawn position (top-left of the body)
    pub const SPAWN_X: f32 = 100.0;
    pub const SPAWN_Y: f32 = 500.0;
    /// Body bounding-box size
    pub const BODY_WIDTH: f32 = 32.0;
    pub const BODY_HEIGHT: f32 = 64.0;
}
