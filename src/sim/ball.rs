//! Ball and spark entities

use glam::Vec2;

use crate::renderer::{Canvas, Rgb};

/// Stable handle for a ball. Identity is compared by handle, never by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BallId(pub u32);

/// Viewport dimensions in pixels, fixed at startup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A ball entity
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub id: BallId,
    /// Live ball count when this ball was created. A label only, not unique.
    pub index: usize,
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Rgb,
    /// Radius in pixels
    pub size: f32,
    /// Collisions survived so far
    pub collisions: u32,
}

impl Ball {
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.fill_circle(self.pos, self.size, self.color);
    }

    /// Reflect off the walls, then move by one tick of velocity.
    ///
    /// Walls are tested against the position before the move, once per tick.
    /// Each wall is tested on its own, so a ball touching two opposite walls
    /// flips twice.
    pub fn step(&mut self, viewport: Viewport) {
        // right wall
        if self.pos.x + self.size >= viewport.width {
            self.vel.x = -self.vel.x;
        }
        // left wall
        if self.pos.x - self.size <= 0.0 {
            self.vel.x = -self.vel.x;
        }
        // bottom wall
        if self.pos.y + self.size >= viewport.height {
            self.vel.y = -self.vel.y;
        }
        // top wall
        if self.pos.y - self.size <= 0.0 {
            self.vel.y = -self.vel.y;
        }

        self.pos += self.vel;
    }

    /// True when the two circles overlap (touching does not count)
    pub fn overlaps(&self, other: &Ball) -> bool {
        self.pos.distance(other.pos) < self.size + other.size
    }
}

/// One-frame flash drawn where a collision happened
#[derive(Debug, Clone, PartialEq)]
pub struct Spark {
    pub pos: Vec2,
    pub size: f32,
    pub is_new: bool,
}

impl Spark {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self {
            pos,
            size,
            is_new: true,
        }
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.fill_circle(self.pos, self.size, Rgb::WHITE);
    }
}
