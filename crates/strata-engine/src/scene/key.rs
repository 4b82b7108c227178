use core::cmp::Ordering;

use bytemuck::{Pod, Zeroable};

use super::DepthOrder;

/// Stable sort key for one primitive group.
///
/// Ordering rules:
/// 1) `depth`: per [`DepthOrder`]
/// 2) `index`: ascending (submission order for equal depth)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct PrimitiveSortKey {
    /// `z` of the group's first vertex.
    pub depth: f32,
    /// Index of the group's first vertex in the unsorted buffer.
    pub index: u32,
}

impl PrimitiveSortKey {
    /// Builds a key. `-0.0` is folded into `0.0` so both compare as one layer.
    #[inline]
    pub fn new(depth: f32, index: u32) -> Self {
        Self { depth: depth + 0.0, index }
    }

    #[inline]
    pub fn cmp_in(&self, other: &Self, order: DepthOrder) -> Ordering {
        match order.cmp_depth(self.depth, other.depth) {
            Ordering::Equal => self.index.cmp(&other.index),
            o => o,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_depth_falls_back_to_index() {
        let a = PrimitiveSortKey::new(5.0, 0);
        let b = PrimitiveSortKey::new(5.0, 6);
        assert_eq!(a.cmp_in(&b, DepthOrder::Descending), Ordering::Less);
        assert_eq!(b.cmp_in(&a, DepthOrder::Ascending), Ordering::Greater);
    }

    #[test]
    fn depth_wins_over_index() {
        let near = PrimitiveSortKey::new(1.0, 0);
        let far = PrimitiveSortKey::new(3.0, 6);
        assert_eq!(far.cmp_in(&near, DepthOrder::Descending), Ordering::Less);
        assert_eq!(near.cmp_in(&far, DepthOrder::Ascending), Ordering::Less);
    }

    #[test]
    fn negative_zero_is_same_layer() {
        let a = PrimitiveSortKey::new(-0.0, 0);
        let b = PrimitiveSortKey::new(0.0, 3);
        assert_eq!(a.cmp_in(&b, DepthOrder::Descending), Ordering::Less);
        assert_eq!(a.cmp_in(&b, DepthOrder::Ascending), Ordering::Less);
    }
}
