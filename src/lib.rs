//! Ball Court - bouncing balls that collide, spark and disappear
//!
//! Core modules:
//! - `sim`: Simulation (balls, court, input clamping, frame tick)
//! - `renderer`: Canvas abstraction and the WebGPU rasterizer
//! - `settings`: Host-supplied configuration

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Court configuration constants
pub mod consts {
    /// Ball radius range (pixels)
    pub const MIN_BALL_SIZE: u32 = 10;
    pub const MAX_BALL_SIZE: u32 = 20;

    /// Collisions before a ball is culled
    pub const MAX_COLLISIONS: u32 = 1;

    /// Per-axis spawn speed cap (pixels per frame)
    pub const MAX_BALL_SPEED: u32 = 7;

    /// Largest values settings may ask for
    pub const BALL_SIZE_LIMIT: u32 = 1000;
    pub const BALL_SPEED_LIMIT: u32 = 500;

    /// Alpha of the black wash painted over the canvas each frame
    pub const FADE_ALPHA: f32 = 0.1;

    /// Seed used when neither the settings nor the host provide one
    pub const DEFAULT_SEED: u64 = 0xBA11_C0DE;
}
