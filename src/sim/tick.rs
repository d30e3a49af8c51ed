//! One frame of the court
//!
//! Draw, move and collide every ball, flash the sparks, then forget them.
//! Scheduling the next frame is the host's job.

use super::ball::BallId;
use super::court::{BallCourt, CollisionEvent};
use crate::renderer::{Canvas, Rgba};

/// What happened during one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Frame counter after this frame (first frame is 1)
    pub frame: u64,
    pub balls_drawn: usize,
    pub collisions: Vec<CollisionEvent>,
    pub removed: Vec<BallId>,
    pub sparks_drawn: usize,
    /// Balls left alive at the end of the frame
    pub balls_live: usize,
}

/// Advance the court by one frame, drawing into `canvas`.
///
/// Order matters and is fixed:
/// 1. translucent black wash over the whole viewport (leaves trails)
/// 2. for every ball alive at frame start: draw, step, collide
/// 3. draw every spark
/// 4. clear the sparks
pub fn tick<C: Canvas + ?Sized>(court: &mut BallCourt, canvas: &mut C) -> FrameReport {
    let frame = court.advance_frame();
    let viewport = court.viewport();
    let fade = Rgba::new(0, 0, 0, court.settings().fade_alpha);

    canvas.fill_rect(0.0, 0.0, viewport.width, viewport.height, fade);

    let mut report = FrameReport {
        frame,
        ..Default::default()
    };

    // Balls culled earlier in this frame are skipped.
    for id in court.ball_ids() {
        let Some(ball) = court.ball_mut(id) else {
            continue;
        };
        ball.draw(canvas);
        ball.step(viewport);
        report.balls_drawn += 1;

        for event in court.detect_collisions(id) {
            if event.subject_removed {
                report.removed.push(event.subject);
            }
            if event.other_removed {
                report.removed.push(event.other);
            }
            report.collisions.push(event);
        }
    }

    for spark in court.sparks() {
        spark.draw(canvas);
    }
    report.sparks_drawn = court.sparks().len();
    court.clear_sparks();

    report.balls_live = court.balls().len();
    if !report.collisions.is_empty() {
        log::debug!(
            "Frame {}: {} collisions, {} culled, {} balls live",
            frame,
            report.collisions.len(),
            report.removed.len(),
            report.balls_live
        );
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, DrawList, Rgb};
    use crate::settings::Settings;
    use crate::sim::Viewport;
    use glam::Vec2;

    fn court(width: f32, height: f32, max_collisions: u32) -> BallCourt {
        let settings = Settings {
            max_collisions,
            ..Default::default()
        };
        BallCourt::new(Viewport::new(width, height), settings, 2024)
    }

    #[test]
    fn test_empty_frame_only_fades() {
        let mut c = court(320.0, 240.0, 1);
        let mut list = DrawList::new();
        let report = tick(&mut c, &mut list);

        assert_eq!(report.frame, 1);
        assert_eq!(report.balls_drawn, 0);
        assert_eq!(
            list.commands(),
            &[DrawCommand::Rect {
                x: 0.0,
                y: 0.0,
                width: 320.0,
                height: 240.0,
                color: Rgba::new(0, 0, 0, 0.1),
            }]
        );
    }

    #[test]
    fn test_frame_counter_advances() {
        let mut c = court(100.0, 100.0, 1);
        let mut list = DrawList::new();
        tick(&mut c, &mut list);
        let report = tick(&mut c, &mut list);
        assert_eq!(report.frame, 2);
        assert_eq!(c.frames(), 2);
    }

    #[test]
    fn test_ball_drawn_before_step() {
        let mut c = court(200.0, 200.0, 1);
        let id = c.spawn_ball(Vec2::new(100.0, 100.0), Vec2::new(5.0, 5.0), 10.0, Rgb::new(90, 20, 40));
        let mut list = DrawList::new();
        tick(&mut c, &mut list);

        assert_eq!(list.circle_count(), 1);
        assert!(matches!(
            list.commands()[1],
            DrawCommand::Circle { center, .. } if center == Vec2::new(100.0, 100.0)
        ));
        assert_eq!(c.ball(id).unwrap().pos, Vec2::new(105.0, 105.0));
    }

    #[test]
    fn test_end_to_end_wall_bounce() {
        let mut c = court(200.0, 200.0, 1);
        let id = c.spawn_ball(Vec2::new(100.0, 100.0), Vec2::new(5.0, 5.0), 10.0, Rgb::new(90, 20, 40));
        let mut list = DrawList::new();

        tick(&mut c, &mut list);
        let b = c.ball(id).unwrap();
        assert_eq!(b.pos, Vec2::new(105.0, 105.0));
        assert_eq!(b.vel, Vec2::new(5.0, 5.0));

        while c.ball(id).unwrap().pos.x < 190.0 {
            list.clear();
            tick(&mut c, &mut list);
        }
        assert_eq!(c.ball(id).unwrap().vel.x, 5.0);

        tick(&mut c, &mut list);
        let b = c.ball(id).unwrap();
        assert_eq!(b.vel.x, -5.0);
        assert_eq!(b.pos.x, 185.0);
    }

    #[test]
    fn test_collision_frame_culls_and_flashes() {
        let mut c = court(400.0, 400.0, 1);
        let a = c.spawn_ball(Vec2::new(100.0, 100.0), Vec2::ZERO, 10.0, Rgb::new(90, 20, 40));
        let b = c.spawn_ball(Vec2::new(110.0, 100.0), Vec2::ZERO, 10.0, Rgb::new(80, 20, 40));
        let mut list = DrawList::new();

        let report = tick(&mut c, &mut list);

        // only `a` is drawn: `b` is culled during `a`'s pass
        assert_eq!(report.balls_drawn, 1);
        assert_eq!(report.collisions.len(), 1);
        assert_eq!(report.removed, vec![a, b]);
        assert_eq!(report.sparks_drawn, 2);
        assert_eq!(report.balls_live, 0);
        assert!(c.balls().is_empty());
        assert!(c.sparks().is_empty());

        let white: Vec<_> = list
            .commands()
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Circle { color, .. } if *color == Rgb::WHITE))
            .collect();
        assert_eq!(white.len(), 2);
    }

    #[test]
    fn test_surviving_pair_collides_twice_per_frame() {
        let mut c = court(400.0, 400.0, 10);
        let a = c.spawn_ball(Vec2::new(100.0, 100.0), Vec2::new(1.0, 0.0), 10.0, Rgb::new(90, 20, 40));
        let b = c.spawn_ball(Vec2::new(110.0, 100.0), Vec2::new(-1.0, 0.0), 10.0, Rgb::new(80, 20, 40));
        let mut list = DrawList::new();

        let report = tick(&mut c, &mut list);
        assert_eq!(report.collisions.len(), 2);
        assert_eq!(report.sparks_drawn, 4);
        assert_eq!(c.ball(a).unwrap().collisions, 2);
        assert_eq!(c.ball(b).unwrap().collisions, 2);
    }

    #[test]
    fn test_every_spark_drawn_once_then_cleared() {
        let mut c = court(300.0, 300.0, 1);
        for i in 0..5 {
            c.add_spark(Vec2::new(i as f32 * 10.0, 5.0), 4.0);
        }
        let mut list = DrawList::new();
        let report = tick(&mut c, &mut list);

        assert_eq!(report.sparks_drawn, 5);
        assert_eq!(list.circle_count(), 5);
        assert!(c.sparks().is_empty());

        list.clear();
        tick(&mut c, &mut list);
        assert_eq!(list.circle_count(), 0);
    }

    #[test]
    fn test_fade_uses_settings_alpha() {
        let settings = Settings {
            fade_alpha: 0.25,
            ..Default::default()
        };
        let mut c = BallCourt::new(Viewport::new(50.0, 50.0), settings, 1);
        let mut list = DrawList::new();
        tick(&mut c, &mut list);
        assert!(matches!(
            list.commands()[0],
            DrawCommand::Rect { color, .. } if color.a == 0.25
        ));
    }
}
