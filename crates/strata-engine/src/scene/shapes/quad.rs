use crate::buffer::BufferError;
use crate::render::Vertex;
use crate::scene::{Primitive, VertexBuffer};

use super::QUAD_VERTEX_COUNT;

impl VertexBuffer {
    /// Records a quad given as two triangles. Vertices are stored as given.
    ///
    /// Each triangle sorts on the `z` of its own first vertex (indices 0 and 3).
    #[inline]
    pub fn push_quad(&mut self, quad: [Vertex; QUAD_VERTEX_COUNT]) -> Result<(), BufferError> {
        self.push(Primitive::Quad(quad))
    }
}
