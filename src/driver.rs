//! Fixed-timestep driver
//!
//! The renderer runs at whatever rate the platform gives it; physics runs at
//! exactly `time_step`. The accumulator bridges the two: each rendered frame
//! deposits its (clamped) real elapsed time and the simulation drains it in
//! whole ticks, carrying any remainder into the next frame.

use crate::sim::{SimState, TickInput, tick};

/// Accumulator that converts variable frame times into whole fixed ticks.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: f32,
    max_frame_time: f32,
    accumulator: f32,
}

impl FixedTimestep {
    /// `step` and `max_frame_time` come from a validated `Tuning`.
    pub fn new(step: f32, max_frame_time: f32) -> Self {
        Self {
            step,
            max_frame_time,
            accumulator: 0.0,
        }
    }

    /// Deposit one frame's elapsed time and drain whole ticks.
    ///
    /// Frame time is clamped to `[0, max_frame_time]` before accumulation,
    /// so a stall (debugger pause, OS suspend) produces a bounded burst of
    /// catch-up ticks instead of a runaway loop.
    pub fn ticks(&mut self, frame_time: f32) -> u32 {
        let frame_time = if frame_time.is_finite() {
            frame_time.clamp(0.0, self.max_frame_time)
        } else {
            log::warn!("non-finite frame time {frame_time}, dropping frame");
            0.0
        };
        self.accumulator += frame_time;

        let mut n = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            n += 1;
        }
        n
    }

    /// Unspent time carried to the next frame (always `< step`).
    #[inline]
    pub fn remainder(&self) -> f32 {
        self.accumulator
    }
}

/// Run all physics ticks owed for one rendered frame.
///
/// The jump edge is consumed after the first tick so one press triggers at
/// most one jump even when a frame owes several ticks. Returns the number of
/// ticks run; the caller renders once afterwards regardless.
pub fn advance(
    clock: &mut FixedTimestep,
    state: &mut SimState,
    input: &mut TickInput,
    frame_time: f32,
) -> u32 {
    let dt = state.tuning.time_step;
    let n = clock.ticks(frame_time);
    for _ in 0..n {
        tick(state, input, dt);
        input.jump = input.jump.consume_edge();
    }
    n
}
