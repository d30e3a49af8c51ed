//! The one vertex format both shape tessellation and the GPU agree on

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::shapes::pixel_to_ndc;

/// A triangle corner with a straight-alpha color.
///
/// Tessellation builds these in viewport pixels; [`Vertex::into_ndc`] moves
/// them into clip space right before upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub fn at(point: Vec2, color: [f32; 4]) -> Self {
        Self {
            position: point.to_array(),
            color,
        }
    }

    pub fn point(&self) -> Vec2 {
        Vec2::from_array(self.position)
    }

    /// Same vertex with its pixel position mapped into NDC for a
    /// `viewport`-sized target
    pub fn into_ndc(self, viewport: (u32, u32)) -> Self {
        Self::at(pixel_to_ndc(self.point(), viewport), self.color)
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}
