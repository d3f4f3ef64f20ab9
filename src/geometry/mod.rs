//! Geometry primitives for triangle classification.
//!
//! Points are plain `f64` triples. Triangles derive their edge lengths and
//! interior angles on demand; nothing is cached between calls.

pub mod point;
pub mod triangle;

pub use point::Point3;
pub use triangle::{EdgeLengths, Triangle};
