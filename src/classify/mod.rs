//! Triangle shape classification.
//!
//! A triangle is assigned exactly one [`ShapeCategory`] from its edge lengths
//! and, independently, a right-angle flag from its interior angles. Both are
//! folded into a [`CountVector`]; a right isosceles triangle bumps both the
//! `isosceles` and the `right` slot.
//!
//! # Example
//! ```rust
//! use face_classify::classify::{ShapeCategory, TriangleClassifier};
//! use face_classify::config::ClassifierConfig;
//! use face_classify::geometry::{Point3, Triangle};
//!
//! let classifier = TriangleClassifier::new(ClassifierConfig::tolerant())?;
//! let tri = Triangle::new(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! );
//! let result = classifier.classify(&tri);
//! assert_eq!(result.shape, ShapeCategory::Isosceles);
//! assert!(result.right);
//! # Ok::<(), face_classify::mesh_error::FaceClassError>(())
//! ```

pub mod accumulate;
pub mod counts;

pub use accumulate::ClassificationAccumulator;
pub use counts::{CountEntry, CountVector};

use crate::config::{ClassifierConfig, DegeneratePolicy};
use crate::geometry::Triangle;
use crate::mesh_error::FaceClassError;
use itertools::Itertools;

/// Side-length category of a triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ShapeCategory {
    /// Three equal sides.
    Equilateral,
    /// Exactly two equal sides.
    Isosceles,
    /// No equal sides.
    Scalene,
}

impl ShapeCategory {
    /// Map a count of distinct edge lengths to a category.
    pub fn from_distinct_sides(distinct: usize) -> Self {
        match distinct {
            1 => ShapeCategory::Equilateral,
            2 => ShapeCategory::Isosceles,
            _ => ShapeCategory::Scalene,
        }
    }
}

/// Outcome of classifying one triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClassificationResult {
    pub shape: ShapeCategory,
    /// Whether any interior angle compares equal to 90°.
    pub right: bool,
}

/// Classifies single triangles under a fixed [`ClassifierConfig`].
///
/// Holds no mutable state, so one instance can be shared across threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct TriangleClassifier {
    config: ClassifierConfig,
}

impl TriangleClassifier {
    /// Create a classifier, validating the config.
    pub fn new(config: ClassifierConfig) -> Result<Self, FaceClassError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify a triangle, clamping degenerate geometry.
    ///
    /// Vertices must be finite; the result for NaN or infinite input is
    /// unspecified. This ignores [`DegeneratePolicy::Skip`]; use
    /// [`classify_checked`](Self::classify_checked) to honour it.
    pub fn classify(&self, triangle: &Triangle) -> ClassificationResult {
        let edges = triangle.edge_lengths();
        let lengths = edges.to_array();
        let scale = edges.longest();

        let right = edges
            .interior_angles()
            .iter()
            .any(|&angle| self.config.right_angle.matches(angle, 90.0, 1.0));

        let shape = self.shape_of(lengths, scale);
        ClassificationResult { shape, right }
    }

    /// Classify a triangle, applying the configured degenerate policy.
    ///
    /// Returns [`FaceClassError::NonFiniteCoordinate`] (with the vertex index
    /// within the triangle) for NaN or infinite input, and
    /// [`FaceClassError::DegenerateGeometry`] when the policy is
    /// [`DegeneratePolicy::Skip`] and the triangle is degenerate.
    pub fn classify_checked(
        &self,
        triangle: &Triangle,
    ) -> Result<ClassificationResult, FaceClassError> {
        if let Some(vertex) = triangle.first_non_finite() {
            return Err(FaceClassError::NonFiniteCoordinate { vertex });
        }
        if self.config.degenerate == DegeneratePolicy::Skip && triangle.is_degenerate() {
            return Err(FaceClassError::DegenerateGeometry {
                lengths: triangle.edge_lengths().to_array(),
            });
        }
        Ok(self.classify(triangle))
    }

    fn shape_of(&self, lengths: [f64; 3], scale: f64) -> ShapeCategory {
        let sides = self.config.sides;
        // Under a tolerance "equal" is not transitive, so count matching
        // pairs instead of deduplicating.
        let equal_pairs = lengths
            .iter()
            .tuple_combinations()
            .filter(|&(&x, &y)| sides.matches(x, y, scale))
            .count();
        let distinct = match equal_pairs {
            0 => 3,
            1 | 2 => 2,
            _ => 1,
        };
        ShapeCategory::from_distinct_sides(distinct)
    }
}

static_assertions::assert_impl_all!(TriangleClassifier: Send, Sync, Copy);
