//! Growable element storage.
//!
//! Responsibilities:
//! - own contiguous per-frame storage with explicit `count` / `capacity`
//! - grow geometrically and keep capacity across frames
//! - surface allocation failure instead of aborting

mod error;
mod growable;

pub use error::BufferError;
pub use growable::{GrowableBuffer, DEFAULT_START_CAPACITY};
