use crate::buffer::{BufferError, GrowableBuffer};
use crate::render::Vertex;

use super::{DepthOrder, PrimitiveSortKey, SortError};

/// Outcome of a successful sort.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct SortStats {
    /// Primitive groups in the buffer.
    pub primitives: usize,
    /// Groups dropped by the bounds guard. Zero unless keys were corrupted.
    pub skipped: usize,
}

/// Reorders a flat vertex buffer by primitive depth.
///
/// The buffer is treated as consecutive groups of `group` vertices; groups are
/// moved whole and never reordered internally. Ordering is depth per
/// [`DepthOrder`], then original position, so equal depths keep submission
/// order no matter how the key sort itself behaves.
///
/// Key and scratch storage are owned here and reused across frames; no
/// allocation happens once they have grown to the frame's size.
#[derive(Debug)]
pub struct DepthSorter {
    order: DepthOrder,
    keys: GrowableBuffer<PrimitiveSortKey>,
    scratch: GrowableBuffer<Vertex>,
}

impl DepthSorter {
    pub fn new(order: DepthOrder) -> Result<Self, BufferError> {
        Ok(Self {
            order,
            keys: GrowableBuffer::new()?,
            scratch: GrowableBuffer::new()?,
        })
    }

    #[inline]
    pub fn order(&self) -> DepthOrder {
        self.order
    }

    /// Elements currently allocated for keys and scratch vertices.
    #[inline]
    pub fn retained_capacity(&self) -> usize {
        self.keys.capacity() + self.scratch.capacity()
    }

    /// Frees key and scratch storage. The sorter regrows it on the next sort.
    pub fn destroy(&mut self) {
        self.keys.destroy();
        self.scratch.destroy();
    }

    /// Sorts `vertices` in place, `group` vertices per primitive.
    ///
    /// On error nothing has been written to `vertices`.
    pub fn sort(
        &mut self,
        vertices: &mut GrowableBuffer<Vertex>,
        group: usize,
    ) -> Result<SortStats, SortError> {
        let vertex_count = vertices.count();
        let primitives = primitive_count(vertex_count, group)?;
        log::trace!("sorting, vertex_count={vertex_count}, primitives={primitives}, order={:?}", self.order);

        self.build_keys(vertices.as_slice(), group)?;

        self.scratch.clear();
        self.scratch.push(vertices.as_slice())?;

        // Unstable on purpose: the index tie-break makes every key distinct.
        let order = self.order;
        self.keys
            .as_mut_slice()
            .sort_unstable_by(|a, b| a.cmp_in(b, order));

        let skipped = reorder(
            self.keys.as_slice(),
            self.scratch.as_slice(),
            vertices.as_mut_slice(),
            group,
        );

        Ok(SortStats { primitives, skipped })
    }

    fn build_keys(&mut self, vertices: &[Vertex], group: usize) -> Result<(), BufferError> {
        self.keys.set_count(vertices.len() / group)?;

        let starts = (0..vertices.len()).step_by(group);
        for (key, start) in self.keys.as_mut_slice().iter_mut().zip(starts) {
            // `start` fits: the caller checked the vertex count against u32.
            *key = PrimitiveSortKey::new(vertices[start].z, start as u32);
        }
        Ok(())
    }
}

/// Number of `group`-sized primitives in `vertex_count` vertices.
///
/// Fails when the count does not split evenly or when vertex indices would
/// not fit a sort key.
fn primitive_count(vertex_count: usize, group: usize) -> Result<usize, SortError> {
    if group == 0 || vertex_count % group != 0 {
        log::error!(
            "vertex count is not a multiple of the primitive size, vertex_count={vertex_count}, group={group}"
        );
        return Err(SortError::UnevenGroups { vertex_count, group });
    }
    if u32::try_from(vertex_count).is_err() {
        log::error!("too many vertices to sort, vertex_count={vertex_count}");
        return Err(SortError::IndexOverflow { vertex_count });
    }
    Ok(vertex_count / group)
}

/// Copies each keyed group from `unsorted` into consecutive slots of `sorted`.
///
/// Groups whose source or destination range falls outside the buffer are
/// logged and skipped. Returns the number skipped.
fn reorder(keys: &[PrimitiveSortKey], unsorted: &[Vertex], sorted: &mut [Vertex], group: usize) -> usize {
    let vertex_count = sorted.len().min(unsorted.len());
    let mut skipped = 0;

    for (i, key) in keys.iter().enumerate() {
        let src = key.index as usize;
        let dst = i * group;

        if src + group > vertex_count {
            log::error!(
                "src primitive starting index out of bounds, index={src}, vertex_count={vertex_count}"
            );
            skipped += 1;
            continue;
        }
        if dst + group > vertex_count {
            log::error!(
                "dest primitive starting index out of bounds, index={dst}, vertex_count={vertex_count}"
            );
            skipped += 1;
            continue;
        }

        sorted[dst..dst + group].copy_from_slice(&unsorted[src..src + group]);
    }

    skipped
}
