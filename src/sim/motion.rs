//! Per-tick movement rules
//!
//! Each rule takes the current position and returns the next
//! `(position, velocity)` pair. Cursor-driven rules return `None` when the
//! cursor sits exactly on the entity, since there is no direction to take.

use glam::Vec2;

use super::entity::Board;
use crate::consts::FLEE_STEP;

/// Whether `next` falls outside `[lo, hi]`
#[inline]
fn outside(next: f32, lo: f32, hi: f32) -> bool {
    next > hi || next < lo
}

/// Bounce within the board walls.
///
/// A velocity component is inverted when the projected step on that axis
/// would leave `[margin, board - margin]`; the step then uses the reflected
/// velocity.
pub fn bounce(pos: Vec2, mut vel: Vec2, speed: f32, margin: Vec2, board: &Board) -> (Vec2, Vec2) {
    let projected = pos + vel * speed;
    if outside(projected.x, margin.x, board.size.x - margin.x) {
        vel.x = -vel.x;
    }
    if outside(projected.y, margin.y, board.size.y - margin.y) {
        vel.y = -vel.y;
    }
    (pos + vel * speed, vel)
}

/// Step `speed` units straight toward the cursor
pub fn chase(pos: Vec2, speed: f32, cursor: Vec2) -> Option<(Vec2, Vec2)> {
    let toward = cursor - pos;
    let dir = toward.try_normalize()?;
    Some((pos + dir * speed, toward))
}

/// Step away from the cursor, halting per axis at the walls
pub fn flee(pos: Vec2, speed: f32, cursor: Vec2, margin: Vec2, board: &Board) -> Option<(Vec2, Vec2)> {
    let away = pos - cursor;
    let mut delta = away.try_normalize()? * FLEE_STEP * speed;

    let next = pos + delta;
    if outside(next.x, margin.x, board.size.x - margin.x) {
        delta.x = 0.0;
    }
    if outside(next.y, margin.y, board.size.y - margin.y) {
        delta.y = 0.0;
    }
    Some((pos + delta, away))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn test_bounce_free_flight() {
        let board = Board::default();
        let (pos, vel) = bounce(Vec2::new(300.0, 300.0), Vec2::new(2.0, -2.0), 1.5, Vec2::splat(20.0), &board);
        assert_eq!(vel, Vec2::new(2.0, -2.0));
        assert!((pos - Vec2::new(303.0, 297.0)).length() < EPS);
    }

    #[test]
    fn test_bounce_reflects_at_right_wall() {
        let board = Board::default();
        // 579 + 2 * 1.0 = 581 > 600 - 20
        let (pos, vel) = bounce(Vec2::new(579.0, 300.0), Vec2::new(2.0, -2.0), 1.0, Vec2::splat(20.0), &board);
        assert_eq!(vel, Vec2::new(-2.0, -2.0));
        assert!((pos - Vec2::new(577.0, 298.0)).length() < EPS);
    }

    #[test]
    fn test_bounce_reflects_at_top_wall() {
        let board = Board::default();
        let (_, vel) = bounce(Vec2::new(300.0, 21.0), Vec2::new(2.0, -2.0), 1.0, Vec2::splat(20.0), &board);
        assert_eq!(vel, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_chase_moves_exactly_speed_toward_cursor() {
        let pos = Vec2::new(100.0, 100.0);
        let cursor = Vec2::new(400.0, 500.0);
        let (next, vel) = chase(pos, 1.5, cursor).expect("cursor is away from entity");
        assert!((pos.distance(cursor) - next.distance(cursor) - 1.5).abs() < EPS);
        assert_eq!(vel, cursor - pos);
        // Stays on the line P -> C
        let along = (next - pos).normalize();
        assert!((along - (cursor - pos).normalize()).length() < EPS);
    }

    #[test]
    fn test_chase_on_top_of_cursor_skips() {
        let p = Vec2::new(42.0, 42.0);
        assert!(chase(p, 1.0, p).is_none());
    }

    #[test]
    fn test_flee_moves_away() {
        let board = Board::default();
        let pos = Vec2::new(300.0, 300.0);
        let cursor = Vec2::new(290.0, 300.0);
        let (next, _) = flee(pos, 2.0, cursor, Vec2::splat(25.0), &board).expect("distinct points");
        assert!((next - Vec2::new(301.0, 300.0)).length() < EPS);
    }

    #[test]
    fn test_flee_halts_at_wall_without_bouncing() {
        let board = Board::default();
        let margin = Vec2::splat(25.0);
        // Pinned against the left wall, cursor to the right and below
        let pos = Vec2::new(25.0, 300.0);
        let cursor = Vec2::new(35.0, 310.0);
        let (next, _) = flee(pos, 1.0, cursor, margin, &board).expect("distinct points");
        assert_eq!(next.x, 25.0);
        assert!(next.y < 300.0);
    }

    #[test]
    fn test_flee_on_top_of_cursor_skips() {
        let board = Board::default();
        let p = Vec2::new(100.0, 100.0);
        assert!(flee(p, 1.0, p, Vec2::splat(20.0), &board).is_none());
    }

    proptest! {
        #[test]
        fn prop_flee_stays_in_bounds(
            size in 20.0f32..40.0,
            fx in 0.0f32..1.0,
            fy in 0.0f32..1.0,
            cx in -100.0f32..700.0,
            cy in -100.0f32..700.0,
            speed in 0.0f32..2.0,
            steps in 1usize..200,
        ) {
            let board = Board::default();
            let margin = Vec2::splat(size);
            let span = board.size - margin * 2.0;
            let mut pos = margin + Vec2::new(fx, fy) * span;
            prop_assume!(board.holds(pos, margin));
            let cursor = Vec2::new(cx, cy);
            for _ in 0..steps {
                if let Some((next, _)) = flee(pos, speed, cursor, margin, &board) {
                    pos = next;
                }
                prop_assert!(board.holds(pos, margin), "escaped to {:?}", pos);
            }
        }

        #[test]
        fn prop_bounce_flips_only_when_projected_out(
            x in 20.0f32..580.0,
            y in 20.0f32..580.0,
            vx in -3.0f32..3.0,
            vy in -3.0f32..3.0,
            speed in 0.0f32..2.0,
        ) {
            let board = Board::default();
            let margin = Vec2::splat(20.0);
            let pos = Vec2::new(x, y);
            let vel = Vec2::new(vx, vy);
            let projected = pos + vel * speed;
            let (_, next_vel) = bounce(pos, vel, speed, margin, &board);

            let flip_x = projected.x > 580.0 || projected.x < 20.0;
            let flip_y = projected.y > 580.0 || projected.y < 20.0;
            prop_assert_eq!(next_vel.x, if flip_x { -vx } else { vx });
            prop_assert_eq!(next_vel.y, if flip_y { -vy } else { vy });
            prop_assert!((next_vel.length() - vel.length()).abs() < EPS);
        }
    }
}
