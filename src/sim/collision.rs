//! Axis-separated collision resolution against the obstacle store
//!
//! Motion is applied and corrected one axis at a time, X before Y. Each pass
//! sweeps EVERY obstacle in store order against the (possibly already
//! corrected) body rectangle, so when the body overlaps several obstacles at
//! once the last matching one wins the final correction. The store's order
//! is therefore part of the level's semantics, not an implementation detail.

use super::state::{Level, Player};

/// Apply one tick of velocity to the body and push it out of any obstacles.
pub fn move_and_collide(player: &mut Player, level: &Level, dt: f32) {
    resolve_x(player, level, dt);
    resolve_y(player, level, dt);
}

/// Horizontal pass: integrate X, then push out along X only.
fn resolve_x(player: &mut Player, level: &Level, dt: f32) {
    player.pos.x += player.vel.x * dt;

    for obs in level.obstacles() {
        if player.rect().overlaps(&obs.rect) {
            if player.vel.x > 0.0 {
                player.pos.x = obs.rect.x - player.size.x;
                player.vel.x = 0.0;
            } else if player.vel.x < 0.0 {
                player.pos.x = obs.rect.right();
                player.vel.x = 0.0;
            }
            // Overlap with zero horizontal velocity gets no X correction;
            // the Y pass owns it.
        }
    }
}

/// Vertical pass: integrate Y, derive the ground state, land or bonk.
fn resolve_y(player: &mut Player, level: &Level, dt: f32) {
    player.pos.y += player.vel.y * dt;
    player.on_ground = false;

    for obs in level.obstacles() {
        if player.rect().overlaps(&obs.rect) {
            if player.vel.y > 0.0 {
                // Landing
                player.pos.y = obs.rect.y - player.size.y;
                player.on_ground = true;
                player.vel.y = 0.0;
            } else if player.vel.y < 0.0 {
                // Ceiling bonk always cancels jump sustain, held or not
                player.pos.y = obs.rect.bottom();
                player.vel.y = 0.0;
                player.var_jump_timer = 0.0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Obstacle;
    use glam::Vec2;

    const DT: f32 = 0.016;

    fn player_at(x: f32, y: f32) -> Player {
        Player::new(Vec2::new(x, y), Vec2::new(32.0, 64.0))
    }

    fn level(obstacles: Vec<Obstacle>) -> Level {
        Level::new(obstacles).unwrap()
    }

    #[test]
    fn test_landing_sets_ground_and_zeroes_fall() {
        let floor = level(vec![Obstacle::new(0.0, 600.0, 1280.0, 120.0)]);
        let mut p = player_at(100.0, 530.0);
        p.vel.y = 800.0; // 12.8 px this tick, bottom goes from 594 to past 600

        move_and_collide(&mut p, &floor, DT);

        assert!(p.on_ground);
        assert_eq!(p.vel.y, 0.0);
        assert_eq!(p.pos.y, 600.0 - 64.0);
    }

    #[test]
    fn test_ceiling_bonk_zeroes_rise_and_timer() {
        let bar = level(vec![Obstacle::new(0.0, 200.0, 1280.0, 20.0)]);
        let mut p = player_at(100.0, 225.0); // top just below the bar's bottom
        p.vel.y = -600.0;
        p.var_jump_timer = 0.15;

        move_and_collide(&mut p, &bar, DT);

        assert_eq!(p.vel.y, 0.0);
        assert_eq!(p.var_jump_timer, 0.0);
        assert_eq!(p.pos.y, 220.0);
        assert!(!p.on_ground);
    }

    #[test]
    fn test_wall_pushout_right_and_left() {
        let wall = level(vec![Obstacle::new(300.0, 0.0, 50.0, 720.0)]);

        let mut p = player_at(260.0, 100.0);
        p.vel.x = 900.0; // crosses into the wall this tick
        move_and_collide(&mut p, &wall, DT);
        assert_eq!(p.pos.x, 300.0 - 32.0);
        assert_eq!(p.vel.x, 0.0);

        let mut p = player_at(356.0, 100.0);
        p.vel.x = -900.0;
        move_and_collide(&mut p, &wall, DT);
        assert_eq!(p.pos.x, 350.0);
        assert_eq!(p.vel.x, 0.0);
    }

    #[test]
    fn test_zero_velocity_overlap_is_left_alone() {
        let wall = level(vec![Obstacle::new(300.0, 0.0, 50.0, 720.0)]);
        let mut p = player_at(310.0, 100.0); // embedded, not moving
        move_and_collide(&mut p, &wall, DT);
        assert_eq!(p.pos, Vec2::new(310.0, 100.0));
        assert_eq!(p.vel, Vec2::ZERO);
    }

    #[test]
    fn test_resting_contact_does_not_recollide() {
        let floor = level(vec![Obstacle::new(0.0, 600.0, 1280.0, 120.0)]);
        let mut p = player_at(100.0, 536.0); // bottom exactly on the floor top
        p.vel.x = 200.0;

        move_and_collide(&mut p, &floor, DT);

        // Edge contact is not overlap, so the X pass slides freely
        assert_eq!(p.pos.x, 100.0 + 200.0 * DT);
        assert_eq!(p.vel.x, 200.0);
        assert_eq!(p.pos.y, 536.0);
        // No downward motion this tick, so no landing was recorded
        assert!(!p.on_ground);
    }

    #[test]
    fn test_multi_overlap_resolves_out_of_every_obstacle() {
        // Two overlapping floors; the higher top must win no matter which
        // comes first, because the sweep keeps correcting until the body is
        // clear of all of them.
        let a = Obstacle::new(0.0, 600.0, 1280.0, 200.0);
        let b = Obstacle::new(0.0, 590.0, 1280.0, 200.0);

        for obstacles in [vec![a, b], vec![b, a]] {
            let mut p = player_at(100.0, 560.0);
            p.vel.y = 800.0;
            move_and_collide(&mut p, &level(obstacles), DT);
            assert_eq!(p.pos.y, 590.0 - 64.0);
            assert!(p.on_ground);
            assert_eq!(p.vel.y, 0.0);
        }
    }

    #[test]
    fn test_empty_level_is_free_fall() {
        let mut p = player_at(100.0, 100.0);
        p.vel = Vec2::new(50.0, 50.0);
        move_and_collide(&mut p, &Level::empty(), DT);
        assert_eq!(p.pos, Vec2::new(100.0 + 50.0 * DT, 100.0 + 50.0 * DT));
        assert!(!p.on_ground);
    }
}
