//! Velocity model: approach-based run acceleration, variable-height jump,
//! and gravity
//!
//! This stage is a pure function of the body's velocity state, the tick
//! input, and the tuning constants. It knows nothing about obstacles; the
//! collision pass afterwards corrects whatever it produces.
//!
//! Stage order within a tick is significant: horizontal approach, then the
//! jump edge, then variable-jump sustain/cut, then gravity. Each stage reads
//! the previous stage's output.

use super::state::Player;
use super::tick::TickInput;
use crate::tuning::Tuning;

/// Move `val` toward `target` by at most `max_delta`, never overshooting.
#[inline]
pub fn approach(val: f32, target: f32, max_delta: f32) -> f32 {
    if val < target {
        (val + max_delta).min(target)
    } else {
        (val - max_delta).max(target)
    }
}

/// Advance the body's velocity and jump timer by one tick of input.
pub fn integrate(player: &mut Player, input: &TickInput, tuning: &Tuning, dt: f32) {
    // 1. Horizontal
    let dir = input.move_dir.as_f32();
    let target = dir * tuning.max_run_speed;

    if dir != 0.0 {
        // Over the cap and pushing the same way: decay gently instead of
        // snapping back to max speed.
        let over_cap =
            player.vel.x.abs() > tuning.max_run_speed && player.vel.x.signum() == dir.signum();
        let mut rate = if over_cap {
            tuning.run_reduce
        } else {
            tuning.run_accel
        };
        if !player.on_ground {
            rate *= tuning.air_accel_mult;
        }
        player.vel.x = approach(player.vel.x, target, rate * dt);
    } else {
        let rate = if player.on_ground {
            tuning.friction
        } else {
            tuning.air_friction
        };
        player.vel.x = approach(player.vel.x, 0.0, rate * dt);
    }

    // 2. Jump initiation, only off the edge and only from the ground
    if input.jump.pressed() && player.on_ground {
        player.vel.y = tuning.jump_speed;
        player.var_jump_timer = tuning.var_jump_window;
        player.on_ground = false;
    }

    // 3. Variable jump height: holding sustains the launch speed through the
    // window; releasing early kills the boost for good.
    if player.var_jump_timer > 0.0 {
        player.var_jump_timer -= dt;
        if input.jump.held() {
            player.vel.y = player.vel.y.min(tuning.jump_speed);
        } else {
            player.var_jump_timer = 0.0;
        }
    }

    // 4. Gravity, halved in the apex band when jump is not held
    let apex = player.vel.y.abs() < tuning.half_grav_threshold && !input.jump.held();
    let grav = if apex {
        tuning.gravity * 0.5
    } else {
        tuning.gravity
    };
    player.vel.y = approach(player.vel.y, tuning.max_fall_speed, grav * dt);
}
