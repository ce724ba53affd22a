//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No platform, clock, or rendering dependencies
//! - State mutated in place, nothing allocated per tick

pub mod collision;
pub mod motion;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::move_and_collide;
pub use motion::{approach, integrate};
pub use rect::Rect;
pub use state::{Level, LevelError, Obstacle, Player, SimState};
pub use tick::{JumpInput, MoveDir, TickInput, tick};
