//! Strata engine crate.
//!
//! CPU side of the 2D renderer: primitives recorded by the game layer are
//! expanded into one triangle list, depth-sorted back-to-front and handed to a
//! GPU consumer.
//!
//! Layers, bottom-up:
//! - `buffer`: growable POD storage with explicit count/capacity
//! - `scene`: primitive expansion, depth sorting, the vertex buffer façade
//! - `render`: vertex layout and the submission boundary

pub mod buffer;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
