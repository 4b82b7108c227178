//! Submission boundary.
//!
//! The scene produces a depth-sorted triangle list; this module defines what a
//! GPU consumer receives and how a frame reaches it.
//!
//! Convention:
//! - one `Vertex` layout for every primitive kind
//! - submission is a borrowed slice; consumers copy what they keep

mod batch;
mod sink;
mod vertex;

pub use batch::PrimitiveBatch;
pub use sink::{HeadlessSink, PrimitiveSink};
pub use vertex::{Vertex, VertexList, DEBUG_MAX_VERTICES};
