//! Scan results.

use crate::classify::CountVector;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Counts for one group (source object).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupReport {
    pub name: String,
    pub counts: CountVector,
    /// Faces that were not triangles.
    pub skipped_polygons: u64,
    /// Triangles dropped under the skip policy.
    pub degenerate: u64,
    /// Triangles dropped for NaN or infinite vertices.
    pub non_finite: u64,
}

impl GroupReport {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Per-group tallies and their grand total.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    pub groups: Vec<GroupReport>,
    pub total: CountVector,
    pub skipped_polygons: u64,
    pub degenerate: u64,
    pub non_finite: u64,
}

impl ScanReport {
    /// Sum group tallies into a report.
    pub fn from_groups(groups: Vec<GroupReport>) -> Self {
        let total = groups.iter().map(|g| g.counts).sum();
        let skipped_polygons = groups.iter().map(|g| g.skipped_polygons).sum();
        let degenerate = groups.iter().map(|g| g.degenerate).sum();
        let non_finite = groups.iter().map(|g| g.non_finite).sum();
        Self {
            groups,
            total,
            skipped_polygons,
            degenerate,
            non_finite,
        }
    }

    pub fn estimated_print(&self) -> u64 {
        self.total.estimated_print()
    }
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.total)
    }
}
