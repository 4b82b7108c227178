use crate::render::Vertex;

use super::shapes::{self, QUAD_VERTEX_COUNT, TRIANGLE_VERTEX_COUNT};
use super::BatchConfig;

/// Kind of drawable primitive accepted from the game layer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PrimitiveKind {
    Points,
    Lines,
    Sprites,
    Triangles,
    Quads,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 5] = [
        PrimitiveKind::Points,
        PrimitiveKind::Lines,
        PrimitiveKind::Sprites,
        PrimitiveKind::Triangles,
        PrimitiveKind::Quads,
    ];

    /// Largest input or expanded vertex count of any kind.
    pub const MAX_VERTEX_COUNT: usize = QUAD_VERTEX_COUNT;

    /// Maps the scripting layer's numeric id (`1..=5`) to a kind. `0` and
    /// anything above `5` are unknown.
    pub const fn from_raw(id: u32) -> Option<Self> {
        match id {
            1 => Some(PrimitiveKind::Points),
            2 => Some(PrimitiveKind::Lines),
            3 => Some(PrimitiveKind::Sprites),
            4 => Some(PrimitiveKind::Triangles),
            5 => Some(PrimitiveKind::Quads),
            _ => None,
        }
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        match self {
            PrimitiveKind::Points => 1,
            PrimitiveKind::Lines => 2,
            PrimitiveKind::Sprites => 3,
            PrimitiveKind::Triangles => 4,
            PrimitiveKind::Quads => 5,
        }
    }

    /// Vertices the caller supplies for one primitive.
    #[inline]
    pub const fn input_vertex_count(self) -> usize {
        match self {
            PrimitiveKind::Points => 1,
            PrimitiveKind::Lines | PrimitiveKind::Sprites => 2,
            PrimitiveKind::Triangles => TRIANGLE_VERTEX_COUNT,
            PrimitiveKind::Quads => QUAD_VERTEX_COUNT,
        }
    }

    /// Vertices one primitive occupies in the buffer after expansion.
    ///
    /// This is also the group size used when sorting by this kind.
    #[inline]
    pub const fn expanded_vertex_count(self) -> usize {
        match self {
            PrimitiveKind::Triangles => TRIANGLE_VERTEX_COUNT,
            _ => QUAD_VERTEX_COUNT,
        }
    }
}

/// One primitive with exactly the vertices its kind requires.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Primitive {
    Point(Vertex),
    /// Endpoints A and B.
    Line([Vertex; 2]),
    /// Top-left and bottom-right corners (position + UV).
    Sprite([Vertex; 2]),
    Triangle([Vertex; 3]),
    /// Two triangles in caller-chosen order.
    Quad([Vertex; 6]),
}

impl Primitive {
    /// Takes the first `kind.input_vertex_count()` vertices of `vertices`.
    ///
    /// Returns `None` when too few are supplied; extra vertices are ignored.
    pub fn from_vertices(kind: PrimitiveKind, vertices: &[Vertex]) -> Option<Self> {
        let primitive = match kind {
            PrimitiveKind::Points => Primitive::Point(*vertices.first()?),
            PrimitiveKind::Lines => Primitive::Line(leading(vertices)?),
            PrimitiveKind::Sprites => Primitive::Sprite(leading(vertices)?),
            PrimitiveKind::Triangles => Primitive::Triangle(leading(vertices)?),
            PrimitiveKind::Quads => Primitive::Quad(leading(vertices)?),
        };
        Some(primitive)
    }

    #[inline]
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Primitive::Point(_) => PrimitiveKind::Points,
            Primitive::Line(_) => PrimitiveKind::Lines,
            Primitive::Sprite(_) => PrimitiveKind::Sprites,
            Primitive::Triangle(_) => PrimitiveKind::Triangles,
            Primitive::Quad(_) => PrimitiveKind::Quads,
        }
    }

    /// Input vertices as supplied.
    pub fn vertices(&self) -> &[Vertex] {
        match self {
            Primitive::Point(v) => std::slice::from_ref(v),
            Primitive::Line(v) | Primitive::Sprite(v) => v,
            Primitive::Triangle(v) => v,
            Primitive::Quad(v) => v,
        }
    }

    /// Expands into buffer-ready triangle-list vertices.
    pub fn expand(&self, config: &BatchConfig) -> ExpandedPrimitive {
        match self {
            Primitive::Point(p) => ExpandedPrimitive::quad(shapes::point_quad(p, config.point_width)),
            Primitive::Line([a, b]) => {
                ExpandedPrimitive::quad(shapes::line_quad(a, b, config.line_width))
            }
            Primitive::Sprite([tl, br]) => ExpandedPrimitive::quad(shapes::sprite_quad(tl, br)),
            Primitive::Triangle(t) => ExpandedPrimitive::triangle(*t),
            Primitive::Quad(q) => ExpandedPrimitive::quad(*q),
        }
    }
}

fn leading<const N: usize>(vertices: &[Vertex]) -> Option<[Vertex; N]> {
    vertices.get(..N)?.try_into().ok()
}

/// Output of [`Primitive::expand`]: 6 vertices, or 3 for triangles.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ExpandedPrimitive {
    vertices: [Vertex; QUAD_VERTEX_COUNT],
    len: usize,
}

impl ExpandedPrimitive {
    #[inline]
    fn quad(vertices: [Vertex; QUAD_VERTEX_COUNT]) -> Self {
        Self { vertices, len: QUAD_VERTEX_COUNT }
    }

    #[inline]
    fn triangle(triangle: [Vertex; TRIANGLE_VERTEX_COUNT]) -> Self {
        let mut vertices = [Vertex::default(); QUAD_VERTEX_COUNT];
        vertices[..TRIANGLE_VERTEX_COUNT].copy_from_slice(&triangle);
        Self { vertices, len: TRIANGLE_VERTEX_COUNT }
    }

    #[inline]
    pub fn as_slice(&self) -> &[Vertex] {
        &self.vertices[..self.len]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
