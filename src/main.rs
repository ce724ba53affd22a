//! Uphill entry point
//!
//! Headless native demo: drives the simulation through the fixed-timestep
//! driver with a scripted input sequence and logs the body's state. A real
//! frontend would replace the script with an `InputLatch` fed by its event
//! loop and draw `state.player` / `state.level` after each frame's ticks.

use std::time::Instant;

use uphill::driver::{FixedTimestep, advance};
use uphill::input::InputLatch;
use uphill::sim::{Level, SimState};
use uphill::tuning::Tuning;

/// Scripted device levels for the demo: (until_seconds, left, right, jump)
const SCRIPT: &[(f32, bool, bool, bool)] = &[
    (1.0, false, false, false), // settle onto the floor
    (2.0, false, true, false),  // run right
    (2.1, false, true, true),   // jump, released quickly (short hop)
    (3.0, false, true, false),
    (3.3, false, true, true), // jump held for full height
    (4.5, false, true, true),
    (5.0, true, false, false), // reverse
    (6.0, false, false, false),
];

fn load_tuning() -> Tuning {
    match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => match Tuning::from_json_str(&json) {
                Ok(tuning) => tuning,
                Err(e) => {
                    log::error!("bad tuning file {path}: {e}");
                    std::process::exit(2);
                }
            },
            Err(e) => {
                log::error!("cannot read tuning file {path}: {e}");
                std::process::exit(2);
            }
        },
        None => Tuning::default(),
    }
}

fn main() {
    env_logger::init();
    log::info!("Uphill (headless demo) starting");

    let tuning = load_tuning();
    let state = SimState::new(tuning, Level::prototype());
    let mut state = match state {
        Ok(state) => state,
        Err(e) => {
            log::error!("invalid tuning: {e}");
            std::process::exit(2);
        }
    };

    let mut clock = FixedTimestep::new(state.tuning.time_step, state.tuning.max_frame_time);
    let mut latch = InputLatch::new();

    let demo_len = SCRIPT.last().map(|s| s.0).unwrap_or(0.0);
    let start = Instant::now();
    let mut last = start;
    let mut sim_time = 0.0f32;
    let mut next_report = 0.0f32;

    loop {
        let now = Instant::now();
        let frame_time = now.duration_since(last).as_secs_f32();
        last = now;

        let elapsed = now.duration_since(start).as_secs_f32();
        if elapsed >= demo_len {
            break;
        }

        let (_, left, right, jump) = *SCRIPT
            .iter()
            .find(|s| elapsed < s.0)
            .unwrap_or(&(0.0, false, false, false));
        let mut input = latch.sample(left, right, jump);

        let ticks = advance(&mut clock, &mut state, &mut input, frame_time);
        sim_time += ticks as f32 * state.tuning.time_step;

        if sim_time >= next_report {
            let p = &state.player;
            log::info!(
                "t={sim_time:5.2}s pos=({:7.1},{:6.1}) vel=({:7.1},{:7.1}) on_ground={}",
                p.pos.x,
                p.pos.y,
                p.vel.x,
                p.vel.y,
                p.on_ground
            );
            next_report += 0.5;
        }

        std::thread::sleep(std::time::Duration::from_millis(4));
    }

    log::info!(
        "demo finished: {} ticks simulated, final pos=({:.1},{:.1})",
        (sim_time / state.tuning.time_step).round(),
        state.player.pos.x,
        state.player.pos.y
    );
}
