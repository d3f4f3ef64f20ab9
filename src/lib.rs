#![cfg_attr(docsrs, feature(doc_cfg))]
//! # face-classify
//!
//! face-classify sorts the triangular faces of 3-D meshes by shape
//! (equilateral, isosceles, scalene) and by whether they contain a right
//! angle, and accumulates the results per object and in total.
//!
//! ## Features
//! - Law-of-Cosines classifier with configurable exact or tolerance-based
//!   comparisons for side lengths and the 90° test
//! - Degenerate triangles are clamped and classified, or skipped and tallied
//! - Caller-owned [`CountVector`](classify::CountVector) results with the
//!   derived "estimated print" metric
//! - Validated input from nested vertex lists or flat coordinate buffers
//! - Optional parallel per-object scans behind the `rayon` feature
//!
//! ## Usage
//! ```rust
//! use face_classify::prelude::*;
//!
//! let plate = MeshGroup::from_indexed(
//!     "plate",
//!     3,
//!     &[0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 4.0, 0.0, 3.0, 4.0, 0.0],
//!     &[vec![0, 1, 2], vec![1, 3, 2], vec![0, 1, 3, 2]],
//! )?;
//!
//! let acc = ClassificationAccumulator::with_config(ClassifierConfig::tolerant())?;
//! let report = acc.scan_selection(&[plate])?;
//! assert_eq!(report.total, CountVector::new(0, 0, 2, 2));
//! assert_eq!(report.skipped_polygons, 1);
//! assert_eq!(report.estimated_print(), 6);
//! # Ok::<(), face_classify::mesh_error::FaceClassError>(())
//! ```
//!
//! ## Floating-point comparisons
//! [`ClassifierConfig::default`](config::ClassifierConfig::default) uses exact
//! equality, which misses right angles and equal sides that differ in the last
//! bit. Prefer [`ClassifierConfig::tolerant`](config::ClassifierConfig::tolerant)
//! unless bit-for-bit agreement with exact comparison is required.
//!
//! ## Parallel scans
//! With the `rayon` feature, [`ClassificationAccumulator::scan`](classify::ClassificationAccumulator::scan)
//! tallies groups on the rayon pool. Its tests only build with the feature
//! enabled: `cargo test --features rayon`.
//!
//! ## Logging
//! Diagnostics go through the [`log`] facade; no logger is installed here.

pub mod classify;
pub mod config;
pub mod geometry;
pub mod input;
pub mod mesh_error;
pub mod report;

/// A convenient prelude to import the most-used types:
pub mod prelude {
    pub use crate::classify::{
        ClassificationAccumulator, ClassificationResult, CountVector, ShapeCategory,
        TriangleClassifier,
    };
    pub use crate::config::{ClassifierConfig, Comparison, DegeneratePolicy};
    pub use crate::geometry::{EdgeLengths, Point3, Triangle};
    pub use crate::input::{MeshGroup, Polygon};
    pub use crate::mesh_error::FaceClassError;
    pub use crate::report::{GroupReport, ScanReport};
}
