//! Rendering
//!
//! The simulation paints through the [`Canvas`] trait. A frame is recorded
//! into a [`DrawList`], which the WebGPU [`RenderState`] rasterizes.

pub mod canvas;
pub mod draw_list;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use canvas::{Canvas, Rgb, Rgba};
pub use draw_list::{DrawCommand, DrawList};
pub use pipeline::RenderState;
pub use vertex::Vertex;
