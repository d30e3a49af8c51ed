//! Pointer input: clicks spawn balls
//!
//! Click positions are pulled inside the spawn bounds so a new ball never
//! starts overlapping an edge.

use glam::Vec2;

use super::ball::BallId;
use super::court::{BallCourt, SpawnBounds};

/// Pull a click position inside the spawn bounds, each axis on its own.
/// Positions already inside pass through unchanged.
pub fn clamp_to_spawn_bounds(bounds: SpawnBounds, x: f32, y: f32) -> Vec2 {
    // Not f32::clamp: a viewport narrower than two ball radii inverts the
    // bounds, and clamp panics on min > max.
    let x = if x < bounds.min_x {
        bounds.min_x
    } else if x > bounds.max_x {
        bounds.max_x
    } else {
        x
    };
    let y = if y < bounds.min_y {
        bounds.min_y
    } else if y > bounds.max_y {
        bounds.max_y
    } else {
        y
    };
    Vec2::new(x, y)
}

/// Spawn a ball at a click position (viewport coordinates)
pub fn on_pointer_down(court: &mut BallCourt, x: f32, y: f32) -> BallId {
    let pos = clamp_to_spawn_bounds(court.spawn_bounds(), x, y);
    let id = court.add_ball(Some(pos));
    log::info!(
        "Click at ({:.0}, {:.0}) spawned {:?} at ({:.0}, {:.0}), {} balls live",
        x,
        y,
        id,
        pos.x,
        pos.y,
        court.balls().len()
    );
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::Viewport;
    use proptest::prelude::*;

    fn court() -> BallCourt {
        BallCourt::new(Viewport::new(400.0, 300.0), Settings::default(), 99)
    }

    #[test]
    fn test_inside_passes_through() {
        let mut c = court();
        let id = on_pointer_down(&mut c, 123.5, 77.25);
        assert_eq!(c.ball(id).unwrap().pos, Vec2::new(123.5, 77.25));
    }

    #[test]
    fn test_outside_clamps_to_nearest_edge() {
        let mut c = court();
        let id = on_pointer_down(&mut c, -50.0, 1000.0);
        assert_eq!(c.ball(id).unwrap().pos, Vec2::new(20.0, 280.0));

        let id = on_pointer_down(&mut c, 399.0, 5.0);
        assert_eq!(c.ball(id).unwrap().pos, Vec2::new(380.0, 20.0));
    }

    #[test]
    fn test_exact_bounds_unchanged() {
        let bounds = court().spawn_bounds();
        assert_eq!(
            clamp_to_spawn_bounds(bounds, 20.0, 280.0),
            Vec2::new(20.0, 280.0)
        );
    }

    #[test]
    fn test_inverted_bounds_do_not_panic() {
        let c = BallCourt::new(Viewport::new(30.0, 30.0), Settings::default(), 1);
        let pos = clamp_to_spawn_bounds(c.spawn_bounds(), 0.0, 29.0);
        assert_eq!(pos, Vec2::new(20.0, 10.0));
    }

    #[test]
    fn test_each_click_adds_one_ball() {
        let mut c = court();
        for i in 0..5 {
            on_pointer_down(&mut c, i as f32 * 50.0, 100.0);
        }
        assert_eq!(c.balls().len(), 5);
    }

    proptest! {
        #[test]
        fn clamped_always_within_bounds(x in -1000.0f32..2000.0, y in -1000.0f32..2000.0) {
            let bounds = court().spawn_bounds();
            let p = clamp_to_spawn_bounds(bounds, x, y);
            prop_assert!(p.x >= bounds.min_x && p.x <= bounds.max_x);
            prop_assert!(p.y >= bounds.min_y && p.y <= bounds.max_y);
            if x >= bounds.min_x && x <= bounds.max_x {
                prop_assert_eq!(p.x, x);
            }
            if y >= bounds.min_y && y <= bounds.max_y {
                prop_assert_eq!(p.y, y);
            }
        }
    }
}
