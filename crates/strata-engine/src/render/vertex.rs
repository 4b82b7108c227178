use std::fmt;

use bytemuck::{Pod, Zeroable};

use crate::paint::Color;

/// Vertices shown by [`VertexList`] before the listing is elided.
pub const DEBUG_MAX_VERTICES: usize = 16;

/// One vertex of the submitted triangle list.
///
/// `z` is a layer key used for depth sorting, not a perspective depth.
/// Layout is position (3 floats), color (4 floats), UV (2 floats); see [`Vertex::layout`].
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,

    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,

    pub u: f32,
    pub v: f32,
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4, 2 => Float32x2];

    /// Vertex at `(x, y)` on layer `z`, opaque white, UV `(0, 0)`.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, r: 1.0, g: 1.0, b: 1.0, a: 1.0, u: 0.0, v: 0.0 }
    }

    #[inline]
    pub const fn with_color(mut self, color: Color) -> Self {
        self.r = color.r;
        self.g = color.g;
        self.b = color.b;
        self.a = color.a;
        self
    }

    #[inline]
    pub const fn with_uv(mut self, u: f32, v: f32) -> Self {
        self.u = u;
        self.v = v;
        self
    }

    #[inline]
    pub const fn color(&self) -> Color {
        Color::new(self.r, self.g, self.b, self.a)
    }

    /// Buffer layout the GPU consumer binds for the submitted stream.
    ///
    /// Locations: 0 = position, 1 = color, 2 = UV.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x={:.2}, y={:.2}, z={:.2}, r={:.2}, g={:.2}, b={:.2}, a={:.2}, u={:.2}, v={:.2}",
            self.x, self.y, self.z, self.r, self.g, self.b, self.a, self.u, self.v
        )
    }
}

/// Log-friendly listing of a vertex slice, capped at [`DEBUG_MAX_VERTICES`].
#[derive(Debug, Copy, Clone)]
pub struct VertexList<'a>(pub &'a [Vertex]);

impl fmt::Display for VertexList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, vertex) in self.0.iter().take(DEBUG_MAX_VERTICES).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "vertex[{i}]={{{vertex}}}")?;
        }

        if self.0.len() > DEBUG_MAX_VERTICES {
            f.write_str(", ...")?;
        }
        Ok(())
    }
}
