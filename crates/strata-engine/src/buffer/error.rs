use std::fmt;

/// Failure of a [`GrowableBuffer`](super::GrowableBuffer) operation.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BufferError {
    /// The element type has zero size, so no stride can be derived from it.
    InvalidStride,
    /// Storage for `requested` elements of `stride` bytes could not be allocated.
    ///
    /// The buffer that reported this has been destroyed.
    Allocation { requested: usize, stride: usize },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::InvalidStride => write!(f, "buffer element type has zero size"),
            BufferError::Allocation { requested, stride } => write!(
                f,
                "buffer allocation failed for {requested} elements of {stride} bytes"
            ),
        }
    }
}

impl std::error::Error for BufferError {}
