use crate::render::Vertex;

/// Visible world rectangle `(x1, y1)`..`(x2, y2)`.
///
/// Applying the camera moves its center (rounded down to whole units) to the
/// origin, which is where the submission side places the screen center.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Camera {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Camera {
    #[inline]
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Camera at `(x, y)` spanning `w` × `h`.
    #[inline]
    pub const fn from_origin_size(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::new(x, y, x + w, y + h)
    }

    /// Translation applied to world positions.
    #[inline]
    pub fn offset(&self) -> (f32, f32) {
        (
            -(self.x1 + ((self.x2 - self.x1) / 2.0).floor()),
            -(self.y1 + ((self.y2 - self.y1) / 2.0).floor()),
        )
    }

    /// Moves `vertices` into camera space. Depth, color and UV are untouched.
    pub fn apply(&self, vertices: &mut [Vertex]) {
        let (dx, dy) = self.offset();
        for v in vertices {
            v.x += dx;
            v.y += dy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_camera_is_identity() {
        assert_eq!(Camera::new(-10.0, -10.0, 10.0, 10.0).offset(), (0.0, 0.0));
    }

    #[test]
    fn offset_rounds_half_extent_down() {
        let cam = Camera::from_origin_size(4.0, 0.0, 5.0, 8.0);
        assert_eq!(cam.offset(), (-6.0, -4.0));
    }

    #[test]
    fn apply_moves_positions_only() {
        let cam = Camera::from_origin_size(0.0, 0.0, 100.0, 50.0);
        let mut vs = [Vertex::new(50.0, 25.0, 3.0).with_uv(1.0, 1.0)];
        cam.apply(&mut vs);
        assert_eq!((vs[0].x, vs[0].y, vs[0].z, vs[0].u), (0.0, 0.0, 3.0, 1.0));
    }
}
