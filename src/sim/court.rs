//! The ball court: owner of every ball and spark
//!
//! Balls live in insertion order (which is also draw order). Sparks live for
//! one frame and are cleared by the frame tick after they are drawn.

use glam::Vec2;

use super::ball::{Ball, BallId, Spark, Viewport};
use super::random::CourtRng;
use crate::renderer::Rgb;
use crate::settings::Settings;

/// Region click-spawned balls are clamped into: the viewport inset by the
/// largest ball radius on every side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl SpawnBounds {
    pub fn inset(viewport: Viewport, margin: f32) -> Self {
        Self {
            min_x: margin,
            max_x: viewport.width - margin,
            min_y: margin,
            max_y: viewport.height - margin,
        }
    }
}

/// One detected overlap, as seen from `subject`'s collision pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    pub subject: BallId,
    pub other: BallId,
    /// Color both balls were repainted with
    pub color: Rgb,
    pub subject_removed: bool,
    pub other_removed: bool,
}

pub struct BallCourt {
    viewport: Viewport,
    settings: Settings,
    bounds: SpawnBounds,
    rng: CourtRng,
    /// Live balls in insertion order
    balls: Vec<Ball>,
    /// Sparks emitted since the last clear
    sparks: Vec<Spark>,
    next_id: u32,
    /// Frames ticked so far
    frames: u64,
}

impl BallCourt {
    pub fn new(viewport: Viewport, settings: Settings, seed: u64) -> Self {
        let bounds = SpawnBounds::inset(viewport, settings.max_size as f32);
        Self {
            viewport,
            settings,
            bounds,
            rng: CourtRng::new(seed),
            balls: Vec::new(),
            sparks: Vec::new(),
            next_id: 1,
            frames: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub(crate) fn advance_frame(&mut self) -> u64 {
        self.frames += 1;
        self.frames
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn spawn_bounds(&self) -> SpawnBounds {
        self.bounds
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }

    pub fn ball(&self, id: BallId) -> Option<&Ball> {
        self.balls.iter().find(|b| b.id == id)
    }

    pub fn ball_mut(&mut self, id: BallId) -> Option<&mut Ball> {
        self.balls.iter_mut().find(|b| b.id == id)
    }

    pub fn contains(&self, id: BallId) -> bool {
        self.index_of(id).is_some()
    }

    /// Snapshot of live ball ids in draw order
    pub fn ball_ids(&self) -> Vec<BallId> {
        self.balls.iter().map(|b| b.id).collect()
    }

    fn index_of(&self, id: BallId) -> Option<usize> {
        self.balls.iter().position(|b| b.id == id)
    }

    fn next_ball_id(&mut self) -> BallId {
        let id = BallId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Spawn a ball with a random size, velocity and color.
    ///
    /// Without a position the ball is placed at random, at least its own
    /// radius away from every edge.
    pub fn add_ball(&mut self, at: Option<Vec2>) -> BallId {
        let size = self
            .rng
            .random_int(self.settings.min_size as i32, self.settings.max_size as i32);

        let pos = match at {
            Some(pos) => pos,
            None => {
                let x = self
                    .rng
                    .random_int(size, (self.viewport.width as i32) - size);
                let y = self
                    .rng
                    .random_int(size, (self.viewport.height as i32) - size);
                Vec2::new(x as f32, y as f32)
            }
        };

        let max_speed = self.settings.max_speed as i32;
        let vel = Vec2::new(
            self.rng.random_int(-max_speed, max_speed) as f32,
            self.rng.random_int(-max_speed, max_speed) as f32,
        );
        let color = self.rng.random_color();

        self.spawn_ball(pos, vel, size as f32, color)
    }

    /// Insert a ball with explicit fields
    pub fn spawn_ball(&mut self, pos: Vec2, vel: Vec2, size: f32, color: Rgb) -> BallId {
        let id = self.next_ball_id();
        self.balls.push(Ball {
            id,
            index: self.balls.len(),
            pos,
            vel,
            color,
            size,
            collisions: 0,
        });
        id
    }

    /// Remove a ball by identity.
    ///
    /// # Panics
    /// If the ball is not in the court. Callers only remove balls they just
    /// found here.
    pub fn remove_ball(&mut self, id: BallId) -> Ball {
        let Some(index) = self.index_of(id) else {
            panic!("remove_ball: {:?} is not in the court", id);
        };
        self.balls.remove(index)
    }

    pub fn add_spark(&mut self, pos: Vec2, size: f32) {
        self.sparks.push(Spark::new(pos, size));
    }

    pub fn clear_sparks(&mut self) {
        self.sparks.clear();
    }

    /// Run `id`'s collision pass against every other live ball.
    ///
    /// Each overlap repaints both balls with one fresh color, swaps their
    /// velocities, bumps both collision counters, culls any ball that reached
    /// the limit and drops a spark on each ball. Pairs are not deduplicated:
    /// the other ball's own pass will see the same overlap again.
    ///
    /// The pass walks a snapshot of ids; balls culled mid-pass are skipped,
    /// and the pass ends early if `id` itself is culled.
    pub fn detect_collisions(&mut self, id: BallId) -> Vec<CollisionEvent> {
        let mut events = Vec::new();
        if !self.contains(id) {
            return events;
        }

        for other in self.ball_ids() {
            if other == id {
                continue;
            }
            let (Some(i), Some(j)) = (self.index_of(id), self.index_of(other)) else {
                continue;
            };
            if !self.balls[i].overlaps(&self.balls[j]) {
                continue;
            }

            let event = self.resolve_collision(i, j);
            events.push(event);
            if event.subject_removed {
                break;
            }
        }

        events
    }

    fn resolve_collision(&mut self, i: usize, j: usize) -> CollisionEvent {
        let color = self.rng.random_color();
        let max_collisions = self.settings.max_collisions;

        let (a, b) = pair_mut(&mut self.balls, i, j);
        a.color = color;
        b.color = color;
        std::mem::swap(&mut a.vel, &mut b.vel);
        a.collisions += 1;
        b.collisions += 1;

        let a_spark = (a.pos, a.size);
        let b_spark = (b.pos, b.size);
        let (a_id, b_id) = (a.id, b.id);
        let a_removed = a.collisions >= max_collisions;
        let b_removed = b.collisions >= max_collisions;

        if a_removed {
            let ball = self.remove_ball(a_id);
            log::debug!("Ball {:?} culled after {} collisions", ball.id, ball.collisions);
        }
        if b_removed {
            let ball = self.remove_ball(b_id);
            log::debug!("Ball {:?} culled after {} collisions", ball.id, ball.collisions);
        }

        self.add_spark(a_spark.0, a_spark.1);
        self.add_spark(b_spark.0, b_spark.1);

        CollisionEvent {
            subject: a_id,
            other: b_id,
            color,
            subject_removed: a_removed,
            other_removed: b_removed,
        }
    }
}

/// Two distinct mutable elements of a slice
fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    assert_ne!(i, j, "pair_mut needs two distinct indices");
    if i < j {
        let (head, tail) = items.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = items.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}
