use crate::buffer::BufferError;
use crate::render::Vertex;
use crate::scene::{Primitive, VertexBuffer};

use super::QUAD_VERTEX_COUNT;

/// Expands a point into a `width` × `width` box so it survives rasterization.
///
/// ```text
///  0    2,3
///  x-----x+
///  | \   |
///  |   \ |
///  y+---xy+
/// 1,4    5
/// ```
pub fn point_quad(point: &Vertex, width: f32) -> [Vertex; QUAD_VERTEX_COUNT] {
    let mut quad = [*point; QUAD_VERTEX_COUNT];

    for i in [2, 3, 5] {
        quad[i].x += width;
    }
    for i in [1, 4, 5] {
        quad[i].y += width;
    }

    quad
}

impl VertexBuffer {
    /// Records a point.
    #[inline]
    pub fn push_point(&mut self, point: Vertex) -> Result<(), BufferError> {
        self.push(Primitive::Point(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_point_box() {
        let q = point_quad(&Vertex::new(10.0, 10.0, 0.0), 1.0);
        let xy: Vec<_> = q.iter().map(|v| (v.x, v.y)).collect();
        assert_eq!(
            xy,
            vec![(10.0, 10.0), (10.0, 11.0), (11.0, 10.0), (11.0, 10.0), (10.0, 11.0), (11.0, 11.0)]
        );
    }

    #[test]
    fn keeps_color_uv_and_depth() {
        let p = Vertex::new(0.0, 0.0, 4.0).with_uv(2.0, 3.0);
        for v in point_quad(&p, 2.0) {
            assert_eq!((v.z, v.u, v.v, v.a), (4.0, 2.0, 3.0, 1.0));
        }
    }
}
