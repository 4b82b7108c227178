use crate::buffer::DEFAULT_START_CAPACITY;

use super::DepthOrder;

/// Construction parameters for a [`VertexBuffer`](super::VertexBuffer).
///
/// Defaults reproduce the canonical client: largest depth painted first,
/// 1-unit points and lines.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchConfig {
    /// Paint order of depths.
    pub depth_order: DepthOrder,

    /// Edge length of the box a point expands into.
    pub point_width: f32,

    /// Thickness of the rectangle a line expands into.
    pub line_width: f32,

    /// Vertex capacity reached by the first growth.
    pub start_capacity: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            depth_order: DepthOrder::Descending,
            point_width: 1.0,
            line_width: 1.0,
            start_capacity: DEFAULT_START_CAPACITY,
        }
    }
}
