//! Primitive expansion, one module per primitive shape.
//!
//! Generated quads share one index layout:
//!
//! ```text
//! 0 = TL, 1 = TR, 2 = BL, 3 = BL, 4 = TR, 5 = BR
//! triangles (0, 1, 2) and (3, 4, 5)
//! ```
//!
//! Each module also adds its `push_*` helper to `VertexBuffer`.

pub(crate) mod line;
pub(crate) mod point;
pub(crate) mod quad;
pub(crate) mod sprite;
pub(crate) mod text;
pub(crate) mod triangle;

pub use line::line_quad;
pub use point::point_quad;
pub use sprite::sprite_quad;
pub use text::GlyphGrid;

/// Vertices in one expanded quad (two triangles).
pub const QUAD_VERTEX_COUNT: usize = 6;

/// Vertices in one triangle.
pub const TRIANGLE_VERTEX_COUNT: usize = 3;
