use crate::buffer::BufferError;
use crate::render::Vertex;
use crate::scene::{Primitive, VertexBuffer};

use super::QUAD_VERTEX_COUNT;

/// Expands the line A→B into a thin rectangle `width` thick.
///
/// Thickness goes along the axis the line does not run along:
///
/// ```text
/// mostly vertical:        mostly horizontal:
///  0 A---A+ 1,4            0    2,3
///     \ / \                A-----B
/// 2,3 B---B+ 5             | \   |
///                          A+----B+
///                         1,4    5
/// ```
///
/// Winding depends on direction, so back-face culling must stay disabled for lines.
/// All six vertices stay on A's layer; B contributes position, color and UV.
pub fn line_quad(a: &Vertex, b: &Vertex, width: f32) -> [Vertex; QUAD_VERTEX_COUNT] {
    let mut quad = [*a; QUAD_VERTEX_COUNT];

    let end = Vertex { z: a.z, ..*b };
    for i in [2, 3, 5] {
        quad[i] = end;
    }

    let horizontal = (b.x - a.x).abs() > (b.y - a.y).abs();
    for i in [1, 4, 5] {
        if horizontal {
            quad[i].y += width;
        } else {
            quad[i].x += width;
        }
    }

    quad
}

impl VertexBuffer {
    /// Records a line from `a` to `b`.
    #[inline]
    pub fn push_line(&mut self, a: Vertex, b: Vertex) -> Result<(), BufferError> {
        self.push(Primitive::Line([a, b]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    fn xy(q: &[Vertex]) -> Vec<(f32, f32)> {
        q.iter().map(|v| (v.x, v.y)).collect()
    }

    #[test]
    fn horizontal_line_gets_thickness_on_y() {
        let q = line_quad(&Vertex::new(0.0, 0.0, 0.0), &Vertex::new(10.0, 2.0, 0.0), 1.0);
        assert_eq!(
            xy(&q),
            vec![(0.0, 0.0), (0.0, 1.0), (10.0, 2.0), (10.0, 2.0), (0.0, 1.0), (10.0, 3.0)]
        );
    }

    #[test]
    fn vertical_line_gets_thickness_on_x() {
        let q = line_quad(&Vertex::new(0.0, 0.0, 0.0), &Vertex::new(2.0, 10.0, 0.0), 1.0);
        assert_eq!(
            xy(&q),
            vec![(0.0, 0.0), (1.0, 0.0), (2.0, 10.0), (2.0, 10.0), (1.0, 0.0), (3.0, 10.0)]
        );
    }

    #[test]
    fn diagonal_line_counts_as_vertical() {
        let q = line_quad(&Vertex::new(0.0, 0.0, 0.0), &Vertex::new(5.0, 5.0, 0.0), 1.0);
        assert_eq!((q[1].x, q[1].y), (1.0, 0.0));
        assert_eq!((q[5].x, q[5].y), (6.0, 5.0));
    }

    #[test]
    fn end_vertices_keep_start_depth_and_end_color() {
        let a = Vertex::new(0.0, 0.0, 2.0).with_color(Color::red());
        let b = Vertex::new(8.0, 0.0, 9.0).with_color(Color::blue());
        let q = line_quad(&a, &b, 1.0);

        assert!(q.iter().all(|v| v.z == 2.0));
        assert_eq!(q[0].color(), Color::red());
        assert_eq!(q[5].color(), Color::blue());
    }
}
