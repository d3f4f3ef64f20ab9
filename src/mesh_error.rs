//! FaceClassError: unified error type for face-classify public APIs
//!
//! Classification itself never fails for well-formed input; these variants
//! cover the input-validation boundary, configuration checks, and the
//! per-triangle degenerate case when the skip policy is selected.

use thiserror::Error;

/// Unified error type for face-classify operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FaceClassError {
    /// No groups (mesh objects) were supplied to a selection scan.
    #[error("no mesh objects selected")]
    NoInput,
    /// A triangle has a zero-length edge or collinear vertices.
    ///
    /// Only produced when [`DegeneratePolicy::Skip`](crate::config::DegeneratePolicy::Skip)
    /// is active; the triangle is dropped and the scan continues.
    #[error("degenerate triangle with edge lengths {lengths:?}")]
    DegenerateGeometry {
        /// Edge lengths `(a, b, c)` of the rejected triangle.
        lengths: [f64; 3],
    },
    /// Coordinate buffers must be embedded in 2 or 3 dimensions.
    #[error("unsupported coordinate dimension: {0}")]
    InvalidDimension(usize),
    /// A face referenced a vertex that is not in the coordinate buffer.
    #[error("vertex index {index} out of range for {len} vertices")]
    VertexIndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Number of vertices available.
        len: usize,
    },
    /// A vertex has a NaN or infinite component.
    #[error("non-finite coordinate at vertex {vertex}")]
    NonFiniteCoordinate {
        /// Index of the vertex within its buffer.
        vertex: usize,
    },
    /// Flat coordinate buffer length is not a multiple of the dimension.
    #[error("coordinate buffer of length {len} is not a multiple of dimension {dim}")]
    RaggedCoordinates {
        /// Buffer length.
        len: usize,
        /// Embedding dimension.
        dim: usize,
    },
    /// Classifier configuration rejected by [`ClassifierConfig::validate`](crate::config::ClassifierConfig::validate).
    #[error("invalid classifier config: {0}")]
    InvalidConfig(String),
}
