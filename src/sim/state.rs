//! Simulation state: the controllable body, the obstacle store, and the
//! context object that owns both
//!
//! Everything here is owned by the frame loop and mutated only from `tick`.
//! There are no process-wide singletons; the driver passes `SimState` by
//! reference into the motion and collision stages.

use glam::Vec2;
use thiserror::Error;

use super::rect::Rect;
use crate::tuning::{Tuning, TuningError};

/// The single controllable body
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Top-left of the bounding box
    pub pos: Vec2,
    pub vel: Vec2,
    /// Bounding-box size, constant after creation
    pub size: Vec2,
    /// True only immediately after a downward collision resolved to a landing
    pub on_ground: bool,
    /// Remaining variable-jump window; while positive and jump is held,
    /// upward velocity is re-asserted each tick
    pub var_jump_timer: f32,
}

impl Player {
    pub fn new(spawn: Vec2, size: Vec2) -> Self {
        Self {
            pos: spawn,
            vel: Vec2::ZERO,
            size,
            on_ground: false,
            var_jump_timer: 0.0,
        }
    }

    /// Current bounding box
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Reset to spawn values. A recovery, not a destroy/recreate: the same
    /// body instance continues.
    pub fn respawn(&mut self, spawn: Vec2) {
        self.pos = spawn;
        self.vel = Vec2::ZERO;
        self.on_ground = false;
        self.var_jump_timer = 0.0;
    }
}

/// A static world rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub rect: Rect,
}

impl Obstacle {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
        }
    }
}

/// Level construction errors
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("obstacle {index} has negative extent ({w} x {h})")]
    NegativeExtent { index: usize, w: f32, h: f32 },
}

/// The static obstacle field, loaded once and read-only during simulation.
///
/// The sequence is ordered, and the order matters: the collision passes
/// resolve against every obstacle in store order, so when the body overlaps
/// several at once the last matching obstacle wins the final correction.
#[derive(Debug, Clone)]
pub struct Level {
    obstacles: Vec<Obstacle>,
}

impl Level {
    /// Build a level, rejecting obstacles with negative extent. Zero-area
    /// obstacles are allowed; the strict overlap test makes them inert.
    pub fn new(obstacles: Vec<Obstacle>) -> Result<Self, LevelError> {
        for (index, obs) in obstacles.iter().enumerate() {
            if obs.rect.w < 0.0 || obs.rect.h < 0.0 {
                return Err(LevelError::NegativeExtent {
                    index,
                    w: obs.rect.w,
                    h: obs.rect.h,
                });
            }
        }
        Ok(Self { obstacles })
    }

    /// An empty field (free fall everywhere)
    pub fn empty() -> Self {
        Self {
            obstacles: Vec::new(),
        }
    }

    /// The prototype layout: floor, three steps, side walls, one ceiling bar.
    pub fn prototype() -> Self {
        Self {
            obstacles: vec![
                // Floor
                Obstacle::new(0.0, 600.0, 1280.0, 120.0),
                // Steps
                Obstacle::new(300.0, 500.0, 200.0, 20.0),
                Obstacle::new(600.0, 400.0, 200.0, 20.0),
                Obstacle::new(900.0, 250.0, 300.0, 20.0),
                // Walls
                Obstacle::new(-50.0, 0.0, 50.0, 720.0),
                Obstacle::new(1280.0, 0.0, 50.0, 720.0),
                // Ceiling bar
                Obstacle::new(400.0, 200.0, 100.0, 20.0),
            ],
        }
    }

    #[inline]
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }
}

/// Complete simulation context: tuning, level, and the body.
///
/// Owned by the driver; the render collaborator reads `player` and `level`
/// once per rendered frame after all physics ticks complete.
#[derive(Debug, Clone)]
pub struct SimState {
    pub tuning: Tuning,
    pub level: Level,
    pub player: Player,
}

impl SimState {
    /// Create a simulation at the tuning's spawn point. Fails fast on an
    /// invalid tuning rather than clamping it silently.
    pub fn new(tuning: Tuning, level: Level) -> Result<Self, TuningError> {
        tuning.validate()?;
        let player = Player::new(tuning.spawn, tuning.body_size);
        Ok(Self {
            tuning,
            level,
            player,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{SPAWN_X, SPAWN_Y};

    #[test]
    fn test_level_rejects_negative_extent() {
        let result = Level::new(vec![Obstacle::new(0.0, 0.0, -5.0, 10.0)]);
        assert!(matches!(
            result,
            Err(LevelError::NegativeExtent { index: 0, .. })
        ));
    }

    #[test]
    fn test_level_accepts_zero_area() {
        let level = Level::new(vec![Obstacle::new(0.0, 0.0, 0.0, 0.0)]).unwrap();
        assert_eq!(level.obstacles().len(), 1);
    }

    #[test]
    fn test_sim_state_rejects_bad_tuning() {
        let mut tuning = Tuning::default();
        tuning.time_step = 0.0;
        assert!(SimState::new(tuning, Level::empty()).is_err());
    }

    #[test]
    fn test_player_spawns_airborne_at_rest() {
        let state = SimState::new(Tuning::default(), Level::prototype()).unwrap();
        assert_eq!(state.player.pos, Vec2::new(SPAWN_X, SPAWN_Y));
        assert_eq!(state.player.vel, Vec2::ZERO);
        assert!(!state.player.on_ground);
        assert_eq!(state.player.var_jump_timer, 0.0);
    }

    #[test]
    fn test_respawn_resets_body() {
        let mut player = Player::new(Vec2::new(100.0, 500.0), Vec2::new(32.0, 64.0));
        player.pos = Vec2::new(640.0, 900.0);
        player.vel = Vec2::new(120.0, 1000.0);
        player.on_ground = true;
        player.var_jump_timer = 0.1;

        player.respawn(Vec2::new(100.0, 500.0));

        assert_eq!(player.pos, Vec2::new(100.0, 500.0));
        assert_eq!(player.vel, Vec2::ZERO);
        assert!(!player.on_ground);
        assert_eq!(player.var_jump_timer, 0.0);
    }
}
