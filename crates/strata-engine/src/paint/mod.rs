//! Color model shared by vertices and the scene helpers.
//!
//! Geometry and depth live in `render::Vertex`; this module only owns color.

pub mod color;

pub use color::Color;
