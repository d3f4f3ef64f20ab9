//! Folding groups of polygons into [`CountVector`]s.
//!
//! Each group (one source mesh object) gets a fresh zero vector. Polygons with
//! exactly three vertices are classified; anything else is skipped without
//! error. Group vectors are then summed into the total. Addition is
//! commutative and associative, so the order groups are processed in does
//! not affect the result.
//!
//! With the `rayon` feature, groups are tallied on the rayon pool and merged
//! once every worker has finished.

use super::{CountVector, TriangleClassifier};
use crate::config::ClassifierConfig;
use crate::geometry::{Point3, Triangle};
use crate::input::MeshGroup;
use crate::mesh_error::FaceClassError;
use crate::report::{GroupReport, ScanReport};

/// Applies a [`TriangleClassifier`] over groups of polygons.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClassificationAccumulator {
    classifier: TriangleClassifier,
}

impl ClassificationAccumulator {
    pub fn new(classifier: TriangleClassifier) -> Self {
        Self { classifier }
    }

    /// Build from a config, validating it.
    pub fn with_config(config: ClassifierConfig) -> Result<Self, FaceClassError> {
        TriangleClassifier::new(config).map(Self::new)
    }

    pub fn classifier(&self) -> &TriangleClassifier {
        &self.classifier
    }

    /// Counts for a single group of polygons.
    ///
    /// Triangles with NaN or infinite vertices are left out of the counts.
    pub fn accumulate<P>(&self, polygons: &[P]) -> CountVector
    where
        P: AsRef<[Point3]>,
    {
        self.tally("", polygons).counts
    }

    /// Element-wise sum of group counts.
    pub fn total(groups: &[CountVector]) -> CountVector {
        groups.iter().sum()
    }

    /// One vector per group, in input order.
    pub fn accumulate_groups(&self, groups: &[MeshGroup]) -> Vec<CountVector> {
        self.tally_all(groups).into_iter().map(|g| g.counts).collect()
    }

    /// Per-group tallies plus the grand total.
    ///
    /// An empty `groups` slice yields an empty report with a zero total.
    pub fn scan(&self, groups: &[MeshGroup]) -> ScanReport {
        ScanReport::from_groups(self.tally_all(groups))
    }

    /// Like [`scan`](Self::scan), but zero groups is an error and every group
    /// is [validated](MeshGroup::validate) before any classification starts.
    ///
    /// Hosts use this when an empty selection should be reported to the user
    /// rather than shown as all-zero counts.
    pub fn scan_selection(&self, groups: &[MeshGroup]) -> Result<ScanReport, FaceClassError> {
        if groups.is_empty() {
            return Err(FaceClassError::NoInput);
        }
        for group in groups {
            group.validate()?;
        }
        Ok(self.scan(groups))
    }

    #[cfg(feature = "rayon")]
    fn tally_all(&self, groups: &[MeshGroup]) -> Vec<GroupReport> {
        use rayon::prelude::*;
        groups
            .par_iter()
            .map(|group| self.tally(&group.name, &group.polygons))
            .collect()
    }

    #[cfg(not(feature = "rayon"))]
    fn tally_all(&self, groups: &[MeshGroup]) -> Vec<GroupReport> {
        groups
            .iter()
            .map(|group| self.tally(&group.name, &group.polygons))
            .collect()
    }

    fn tally<P>(&self, name: &str, polygons: &[P]) -> GroupReport
    where
        P: AsRef<[Point3]>,
    {
        let mut report = GroupReport::new(name);
        for (idx, polygon) in polygons.iter().enumerate() {
            let Some(triangle) = Triangle::from_polygon(polygon.as_ref()) else {
                log::trace!(
                    "group `{name}`: skipping face {idx} with {} vertices",
                    polygon.as_ref().len()
                );
                report.skipped_polygons += 1;
                continue;
            };
            match self.classifier.classify_checked(&triangle) {
                Ok(result) => report.counts.record(result),
                Err(err @ FaceClassError::NonFiniteCoordinate { .. }) => {
                    log::warn!("group `{name}`: skipping face {idx}: {err}");
                    report.non_finite += 1;
                }
                Err(err) => {
                    log::warn!("group `{name}`: skipping face {idx}: {err}");
                    report.degenerate += 1;
                }
            }
        }
        log::debug!(
            "group `{name}`: {} triangles classified, {} skipped, {} degenerate, {} non-finite",
            report.counts.triangles(),
            report.skipped_polygons,
            report.degenerate,
            report.non_finite
        );
        report
    }
}

static_assertions::assert_impl_all!(ClassificationAccumulator: Send, Sync);
