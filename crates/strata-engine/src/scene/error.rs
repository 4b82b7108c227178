use std::fmt;

use crate::buffer::BufferError;

/// Failure of a depth sort. The vertex buffer is left in its unsorted state.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SortError {
    /// The vertex count is not a whole number of primitive groups.
    UnevenGroups { vertex_count: usize, group: usize },
    /// Vertex indices no longer fit the sort key.
    IndexOverflow { vertex_count: usize },
    /// Key or scratch storage could not be allocated.
    Scratch(BufferError),
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::UnevenGroups { vertex_count, group } => write!(
                f,
                "{vertex_count} vertices do not split into primitives of {group} vertices"
            ),
            SortError::IndexOverflow { vertex_count } => {
                write!(f, "{vertex_count} vertices exceed the sortable index range")
            }
            SortError::Scratch(_) => write!(f, "sort scratch allocation failed"),
        }
    }
}

impl std::error::Error for SortError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SortError::Scratch(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BufferError> for SortError {
    fn from(err: BufferError) -> Self {
        SortError::Scratch(err)
    }
}
