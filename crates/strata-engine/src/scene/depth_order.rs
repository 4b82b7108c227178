use core::cmp::Ordering;

/// Direction in which primitive depths are painted.
///
/// Whichever order is chosen, primitives sharing a depth keep submission order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum DepthOrder {
    /// Largest `z` first: larger depth means further back (painter's algorithm).
    #[default]
    Descending,
    /// Smallest `z` first.
    Ascending,
}

impl DepthOrder {
    /// Compares two depths in paint order.
    #[inline]
    pub fn cmp_depth(self, a: f32, b: f32) -> Ordering {
        match self {
            DepthOrder::Descending => b.total_cmp(&a),
            DepthOrder::Ascending => a.total_cmp(&b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descending_paints_larger_depth_first() {
        assert_eq!(DepthOrder::Descending.cmp_depth(3.0, 1.0), Ordering::Less);
        assert_eq!(DepthOrder::Descending.cmp_depth(1.0, 3.0), Ordering::Greater);
    }

    #[test]
    fn ascending_paints_smaller_depth_first() {
        assert_eq!(DepthOrder::Ascending.cmp_depth(-2.0, 1.0), Ordering::Less);
    }

    #[test]
    fn default_is_descending() {
        assert_eq!(DepthOrder::default(), DepthOrder::Descending);
    }
}
