use crate::buffer::BufferError;
use crate::render::Vertex;
use crate::scene::{Primitive, VertexBuffer};

use super::TRIANGLE_VERTEX_COUNT;

impl VertexBuffer {
    /// Records a triangle. Vertices are stored as given.
    #[inline]
    pub fn push_triangle(&mut self, triangle: [Vertex; TRIANGLE_VERTEX_COUNT]) -> Result<(), BufferError> {
        self.push(Primitive::Triangle(triangle))
    }
}
