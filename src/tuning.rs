//! Data-driven physics tuning
//!
//! Every constant the motion model, resolver, and driver read lives in one
//! struct so feel can be iterated on without recompiling. A JSON file can
//! override any subset of fields; everything else keeps the baked-in
//! defaults from `consts`.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Tuning validation errors. Construction-time failures, never runtime ones:
/// a simulation that started is never stopped by its configuration.
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("fixed timestep must be positive and finite, got {0}")]
    BadTimeStep(f32),
    #[error("frame-time clamp must be positive and finite, got {0}")]
    BadFrameClamp(f32),
    #[error("body size must be positive, got {0} x {1}")]
    BadBodySize(f32, f32),
    #[error("world dimensions must be positive, got {0} x {1}")]
    BadWorldSize(f32, f32),
    #[error("jump speed must be negative (upward), got {0}")]
    BadJumpSpeed(f32),
    #[error("{name} must be non-negative and finite, got {value}")]
    BadRate { name: &'static str, value: f32 },
}

/// Physics and world configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration toward the fall cap (px/s²)
    pub gravity: f32,
    /// Terminal fall speed (px/s)
    pub max_fall_speed: f32,
    /// Top horizontal run speed (px/s)
    pub max_run_speed: f32,
    /// Acceleration toward the run target (px/s²)
    pub run_accel: f32,
    /// Decay rate used while over the run cap in the input direction
    pub run_reduce: f32,
    /// No-input deceleration on the ground (px/s²)
    pub friction: f32,
    /// No-input deceleration in the air (px/s²)
    pub air_friction: f32,
    /// Multiplier on the input-driven rate while airborne
    pub air_accel_mult: f32,
    /// Initial jump velocity, negative = up (px/s)
    pub jump_speed: f32,
    /// Variable jump sustain window (seconds)
    pub var_jump_window: f32,
    /// Vertical-speed band where gravity halves at the arc apex
    pub half_grav_threshold: f32,
    /// Fixed simulation timestep (seconds)
    pub time_step: f32,
    /// Frame-time clamp for the driver (seconds)
    pub max_frame_time: f32,
    /// Logical world width (px)
    pub world_width: f32,
    /// Logical world height (px)
    pub world_height: f32,
    /// Fall distance past the world bottom before respawning (px)
    pub respawn_margin: f32,
    /// Spawn position, top-left of the body
    pub spawn: Vec2,
    /// Body bounding-box size
    pub body_size: Vec2,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            max_fall_speed: MAX_FALL_SPEED,
            max_run_speed: MAX_RUN_SPEED,
            run_accel: RUN_ACCEL,
            run_reduce: RUN_REDUCE,
            friction: FRICTION,
            air_friction: AIR_FRICTION,
            air_accel_mult: AIR_ACCEL_MULT,
            jump_speed: JUMP_SPEED,
            var_jump_window: VAR_JUMP_WINDOW,
            half_grav_threshold: HALF_GRAV_THRESHOLD,
            time_step: TIME_STEP,
            max_frame_time: MAX_FRAME_TIME,
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            respawn_margin: RESPAWN_MARGIN,
            spawn: Vec2::new(SPAWN_X, SPAWN_Y),
            body_size: Vec2::new(BODY_WIDTH, BODY_HEIGHT),
        }
    }
}

impl Tuning {
    /// Reject invalid configuration at startup instead of clamping it.
    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.time_step > 0.0 && self.time_step.is_finite()) {
            return Err(TuningError::BadTimeStep(self.time_step));
        }
        if !(self.max_frame_time > 0.0 && self.max_frame_time.is_finite()) {
            return Err(TuningError::BadFrameClamp(self.max_frame_time));
        }
        if !(self.body_size.x > 0.0 && self.body_size.y > 0.0) || !self.body_size.is_finite() {
            return Err(TuningError::BadBodySize(self.body_size.x, self.body_size.y));
        }
        if !(self.world_width > 0.0 && self.world_height > 0.0)
            || !self.world_width.is_finite()
            || !self.world_height.is_finite()
        {
            return Err(TuningError::BadWorldSize(self.world_width, self.world_height));
        }
        if !(self.jump_speed < 0.0) || !self.jump_speed.is_finite() {
            return Err(TuningError::BadJumpSpeed(self.jump_speed));
        }
        for (name, value) in [
            ("gravity", self.gravity),
            ("max_fall_speed", self.max_fall_speed),
            ("max_run_speed", self.max_run_speed),
            ("run_accel", self.run_accel),
            ("run_reduce", self.run_reduce),
            ("friction", self.friction),
            ("air_friction", self.air_friction),
            ("air_accel_mult", self.air_accel_mult),
            ("var_jump_window", self.var_jump_window),
            ("half_grav_threshold", self.half_grav_threshold),
            ("respawn_margin", self.respawn_margin),
        ] {
            if !(value >= 0.0) || !value.is_finite() {
                return Err(TuningError::BadRate { name, value });
            }
        }
        Ok(())
    }

    /// Parse a tuning file. Unnamed fields keep their defaults, so a file
    /// can tweak a single constant.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Tuning = serde_json::from_str(json)?;
        log::info!("Loaded tuning overrides from file");
        Ok(tuning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_time_step() {
        let mut t = Tuning::default();
        t.time_step = 0.0;
        assert!(matches!(t.validate(), Err(TuningError::BadTimeStep(_))));
        t.time_step = -0.016;
        assert!(matches!(t.validate(), Err(TuningError::BadTimeStep(_))));
        t.time_step = f32::NAN;
        assert!(matches!(t.validate(), Err(TuningError::BadTimeStep(_))));
    }

    #[test]
    fn test_rejects_negative_body_size() {
        let mut t = Tuning::default();
        t.body_size = Vec2::new(-32.0, 64.0);
        assert!(matches!(t.validate(), Err(TuningError::BadBodySize(..))));
        t.body_size = Vec2::new(32.0, 0.0);
        assert!(matches!(t.validate(), Err(TuningError::BadBodySize(..))));
    }

    #[test]
    fn test_rejects_upward_gravity_and_downward_jump() {
        let mut t = Tuning::default();
        t.gravity = -1.0;
        assert!(matches!(
            t.validate(),
            Err(TuningError::BadRate { name: "gravity", .. })
        ));

        let mut t = Tuning::default();
        t.jump_speed = 950.0;
        assert!(matches!(t.validate(), Err(TuningError::BadJumpSpeed(_))));
    }

    #[test]
    fn test_partial_json_overrides_single_field() {
        let t = Tuning::from_json_str(r#"{ "gravity": 1800.0 }"#).unwrap();
        assert_eq!(t.gravity, 1800.0);
        assert_eq!(t.max_run_speed, MAX_RUN_SPEED);
        assert_eq!(t.spawn, Vec2::new(SPAWN_X, SPAWN_Y));
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_json_roundtrip() {
        let t = Tuning::default();
        let json = serde_json::to_string(&t).unwrap();
        let back = Tuning::from_json_str(&json).unwrap();
        assert_eq!(t, back);
    }
}
