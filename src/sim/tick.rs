//! Fixed timestep simulation tick
//!
//! One tick = motion model, then collision resolution, then world-bounds
//! recovery. `dt` is always the fixed timestep constant; the driver never
//! passes a variable frame time, which is what keeps the simulation
//! deterministic regardless of render frame rate.

use super::collision::move_and_collide;
use super::motion::integrate;
use super::state::SimState;

/// Requested horizontal direction for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveDir {
    Left,
    #[default]
    Neutral,
    Right,
}

impl MoveDir {
    /// Signed direction, -1/0/+1
    #[inline]
    pub fn as_f32(self) -> f32 {
        match self {
            MoveDir::Left => -1.0,
            MoveDir::Neutral => 0.0,
            MoveDir::Right => 1.0,
        }
    }
}

/// The jump input as a tagged event rather than a pair of bare flags.
///
/// `Pressed` is the edge: it appears in exactly one snapshot per physical
/// press and is acted on by exactly one tick. `Held` is the level signal
/// that sustains a jump through the variable-height window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpInput {
    /// Button is up
    #[default]
    Released,
    /// Button is down, but was already down at the previous snapshot
    Held,
    /// Button went down this snapshot (edge; implies down)
    Pressed,
}

impl JumpInput {
    /// Level signal: is the button physically down?
    #[inline]
    pub fn held(self) -> bool {
        matches!(self, JumpInput::Held | JumpInput::Pressed)
    }

    /// Edge signal: did the button go down this snapshot?
    #[inline]
    pub fn pressed(self) -> bool {
        matches!(self, JumpInput::Pressed)
    }

    /// Downgrade the edge after a tick has acted on it, so a frame that runs
    /// several ticks cannot trigger several jumps from one press.
    #[inline]
    #[must_use]
    pub fn consume_edge(self) -> Self {
        match self {
            JumpInput::Pressed => JumpInput::Held,
            other => other,
        }
    }
}

/// Input snapshot for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Requested horizontal direction
    pub move_dir: MoveDir,
    /// Jump event for this tick
    pub jump: JumpInput,
}

/// Advance the simulation by one fixed timestep.
pub fn tick(state: &mut SimState, input: &TickInput, dt: f32) {
    integrate(&mut state.player, input, &state.tuning, dt);
    move_and_collide(&mut state.player, &state.level, dt);

    // World-bounds recovery: falling off the world is expected during level
    // iteration and resolves to a respawn, never an error.
    if state.player.pos.y > state.tuning.world_height + state.tuning.respawn_margin {
        state.player.respawn(state.tuning.spawn);
    }
}
