//! Scene (primitive stream) types.
//!
//! Responsibilities:
//! - accept primitives in any order and expand them into triangle-list vertices
//! - provide deterministic ordering (depth + submission order)
//! - keep shape-specific expansion isolated per shape file under `scene::shapes`

mod camera;
mod config;
mod depth_order;
mod error;
mod key;
mod primitive;
mod sort;
mod vertex_buffer;

pub mod shapes;

pub use camera::Camera;
pub use config::BatchConfig;
pub use depth_order::DepthOrder;
pub use error::SortError;
pub use key::PrimitiveSortKey;
pub use primitive::{ExpandedPrimitive, Primitive, PrimitiveKind};
pub use shapes::GlyphGrid;
pub use sort::{DepthSorter, SortStats};
pub use vertex_buffer::VertexBuffer;
