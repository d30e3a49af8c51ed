//! Tessellation of draw commands into triangle lists

use glam::Vec2;
use std::f32::consts::PI;

use super::draw_list::{DrawCommand, DrawList};
use super::vertex::Vertex;

/// Circle segments for a given radius: enough that edges stay smooth on
/// large balls without wasting triangles on small sparks.
pub fn circle_segments(radius: f32) -> u32 {
    ((radius * 1.5) as u32).clamp(16, 64)
}

/// Map a viewport pixel (origin top-left, y down) to NDC
#[inline]
pub fn pixel_to_ndc(p: Vec2, size: (u32, u32)) -> Vec2 {
    let (w, h) = (size.0.max(1) as f32, size.1.max(1) as f32);
    Vec2::new(p.x / w * 2.0 - 1.0, 1.0 - p.y / h * 2.0)
}

/// Generate vertices for a filled circle (pixel coordinates)
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::at(center, color));
        vertices.push(Vertex::at(center + radius * Vec2::from_angle(theta1), color));
        vertices.push(Vertex::at(center + radius * Vec2::from_angle(theta2), color));
    }

    vertices
}

/// Generate vertices for an axis-aligned filled rectangle (pixel coordinates)
pub fn rect(x: f32, y: f32, width: f32, height: f32, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0, x1, y1) = (x, y, x + width, y + height);
    [(x0, y0), (x1, y0), (x0, y1), (x0, y1), (x1, y0), (x1, y1)]
        .into_iter()
        .map(|(px, py)| Vertex::at(Vec2::new(px, py), color))
        .collect()
}

/// Turn a frame's draw list into NDC triangles, preserving paint order
pub fn tessellate(list: &DrawList, size: (u32, u32)) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    for command in list.commands() {
        let shape = match *command {
            DrawCommand::Rect {
                x,
                y,
                width,
                height,
                color,
            } => rect(x, y, width, height, color.to_f32_array()),
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => circle(
                center,
                radius,
                color.to_f32_array(1.0),
                circle_segments(radius),
            ),
        };

        vertices.extend(shape.into_iter().map(|v| v.into_ndc(size)));
    }

    vertices
}
