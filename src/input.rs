//! Input boundary: raw device levels in, tick snapshots out
//!
//! Keyboard and touch backends only ever report levels ("jump is down",
//! "left is down"). The latch turns those into the snapshot the simulation
//! wants: a merged horizontal direction and a jump event whose `Pressed`
//! edge appears in exactly one snapshot per physical press.

use crate::sim::{JumpInput, MoveDir, TickInput};

/// Per-frame edge latch over raw input levels.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputLatch {
    jump_was_down: bool,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample the current device levels into one tick snapshot.
    ///
    /// Call exactly once per rendered frame, before the physics ticks for
    /// that frame run. Right wins when both horizontal inputs are down.
    pub fn sample(&mut self, left: bool, right: bool, jump_down: bool) -> TickInput {
        let jump = match (jump_down, self.jump_was_down) {
            (true, false) => JumpInput::Pressed,
            (true, true) => JumpInput::Held,
            (false, _) => JumpInput::Released,
        };
        self.jump_was_down = jump_down;

        let move_dir = if right {
            MoveDir::Right
        } else if left {
            MoveDir::Left
        } else {
            MoveDir::Neutral
        };

        TickInput { move_dir, jump }
    }
}
