use crate::buffer::{BufferError, GrowableBuffer};
use crate::render::{Vertex, VertexList};

use super::{BatchConfig, DepthOrder, DepthSorter, Primitive, PrimitiveKind, SortError, SortStats};

/// Per-frame vertex stream: expanded primitives in submission order until sorted.
///
/// Performance characteristics:
/// - `push*()` is amortized O(1) per vertex
/// - `reset()` keeps capacity; no per-frame allocation once warmed
/// - `sort()` reuses its key and scratch storage across frames
///
/// Usage per frame:
///
/// ```ignore
/// vb.reset();
/// vb.push_sprite(top_left, bottom_right)?;
/// vb.sort(PrimitiveKind::Triangles)?;
/// upload(vb.as_bytes(), vb.vertex_count());
/// ```
#[derive(Debug)]
pub struct VertexBuffer {
    vertices: GrowableBuffer<Vertex>,
    sorter: DepthSorter,
    config: BatchConfig,
}

impl VertexBuffer {
    /// Creates a buffer with the default [`BatchConfig`].
    pub fn new() -> Result<Self, BufferError> {
        Self::with_config(BatchConfig::default())
    }

    pub fn with_config(config: BatchConfig) -> Result<Self, BufferError> {
        log::debug!("creating vertex buffer, config={config:?}");

        Ok(Self {
            vertices: GrowableBuffer::with_start_capacity(config.start_capacity)?,
            sorter: DepthSorter::new(config.depth_order)?,
            config,
        })
    }

    #[inline]
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    #[inline]
    pub fn depth_order(&self) -> DepthOrder {
        self.sorter.order()
    }

    /// Drops all recorded vertices. Keeps allocated capacity for reuse.
    #[inline]
    pub fn reset(&mut self) {
        self.vertices.clear();
    }

    /// Expands `primitive` and appends it.
    pub fn push(&mut self, primitive: Primitive) -> Result<(), BufferError> {
        let expanded = primitive.expand(&self.config);
        log::trace!(
            "push primitive, kind={:?}, vertices={}",
            primitive.kind(),
            VertexList(expanded.as_slice())
        );

        self.vertices.push(expanded.as_slice())
    }

    /// Appends a primitive given as loose vertices.
    ///
    /// Fewer vertices than `kind` needs is a usage error: logged, nothing appended.
    pub fn push_primitive(&mut self, kind: PrimitiveKind, vertices: &[Vertex]) -> Result<(), BufferError> {
        match Primitive::from_vertices(kind, vertices) {
            Some(primitive) => self.push(primitive),
            None => {
                log::warn!(
                    "too few vertices for primitive, kind={kind:?}, expected={}, got={}",
                    kind.input_vertex_count(),
                    vertices.len()
                );
                Ok(())
            }
        }
    }

    /// Appends a primitive identified by the scripting layer's numeric kind.
    ///
    /// Unknown kinds are logged and append nothing.
    pub fn push_raw(&mut self, kind: u32, vertices: &[Vertex]) -> Result<(), BufferError> {
        let Some(kind) = PrimitiveKind::from_raw(kind) else {
            log::warn!("unrecognized primitive kind, kind={kind}");
            return Ok(());
        };
        self.push_primitive(kind, vertices)
    }

    /// Sorts recorded primitives by depth, grouping by `kind`'s expanded size.
    ///
    /// At flush time every primitive has become independent triangles, so
    /// callers pass [`PrimitiveKind::Triangles`].
    pub fn sort(&mut self, kind: PrimitiveKind) -> Result<SortStats, SortError> {
        self.sorter.sort(&mut self.vertices, kind.expanded_vertex_count())
    }

    /// Recorded vertices, a flat triangle list.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        self.vertices.as_slice()
    }

    /// Recorded vertices as raw bytes, ready for upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.vertices.as_slice())
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.count()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.vertices.capacity()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Frees vertex storage and the sorter's scratch storage.
    pub fn destroy(&mut self) {
        log::debug!(
            "destroying vertex buffer, capacity={}, sort_capacity={}",
            self.vertices.capacity(),
            self.sorter.retained_capacity()
        );
        self.vertices.destroy();
        self.sorter.destroy();
    }
}
