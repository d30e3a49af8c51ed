//! Court simulation
//!
//! All ball logic lives here:
//! - Seeded RNG only, so a run can be replayed from its seed
//! - Stable iteration order (insertion order of balls)
//! - Drawing goes through the `Canvas` trait; no GPU or platform code

pub mod ball;
pub mod court;
pub mod input;
pub mod random;
pub mod tick;

pub use ball::{Ball, BallId, Spark, Viewport};
pub use court::{BallCourt, CollisionEvent, SpawnBounds};
pub use input::{clamp_to_spawn_bounds, on_pointer_down};
pub use random::CourtRng;
pub use tick::{FrameReport, tick};
