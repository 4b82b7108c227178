use crate::buffer::BufferError;
use crate::render::Vertex;
use crate::scene::{Primitive, VertexBuffer};

use super::QUAD_VERTEX_COUNT;

/// Expands a sprite rectangle into two clockwise triangles.
///
/// `top_left` supplies the layer and color of every corner; `bottom_right`
/// supplies the far edge position and UV.
pub fn sprite_quad(top_left: &Vertex, bottom_right: &Vertex) -> [Vertex; QUAD_VERTEX_COUNT] {
    let mut quad = [*top_left; QUAD_VERTEX_COUNT];

    // TR, TR, BR
    for i in [1, 4, 5] {
        quad[i].x = bottom_right.x;
        quad[i].u = bottom_right.u;
    }
    // BL, BL, BR
    for i in [2, 3, 5] {
        quad[i].y = bottom_right.y;
        quad[i].v = bottom_right.v;
    }

    quad
}

impl VertexBuffer {
    /// Records a sprite covering `top_left`..`bottom_right` in both position and UV.
    #[inline]
    pub fn push_sprite(&mut self, top_left: Vertex, bottom_right: Vertex) -> Result<(), BufferError> {
        self.push(Primitive::Sprite([top_left, bottom_right]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_and_uvs() {
        let tl = Vertex::new(0.0, 0.0, 2.0).with_uv(0.0, 0.0);
        let br = Vertex::new(10.0, 20.0, 2.0).with_uv(1.0, 1.0);
        let q = sprite_quad(&tl, &br);

        let corners: Vec<_> = q.iter().map(|v| (v.x, v.y, v.u, v.v)).collect();
        assert_eq!(
            corners,
            vec![
                (0.0, 0.0, 0.0, 0.0),
                (10.0, 0.0, 1.0, 0.0),
                (0.0, 20.0, 0.0, 1.0),
                (0.0, 20.0, 0.0, 1.0),
                (10.0, 0.0, 1.0, 0.0),
                (10.0, 20.0, 1.0, 1.0),
            ]
        );
    }

    #[test]
    fn triangles_are_clockwise_on_screen() {
        // +Y down: a positive cross product is clockwise on screen.
        let q = sprite_quad(&Vertex::new(0.0, 0.0, 0.0), &Vertex::new(4.0, 4.0, 0.0));
        for t in q.chunks_exact(3) {
            let cross = (t[1].x - t[0].x) * (t[2].y - t[0].y) - (t[1].y - t[0].y) * (t[2].x - t[0].x);
            assert!(cross > 0.0);
        }
    }
}
