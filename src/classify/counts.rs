//! Aggregate face counts.

use super::{ClassificationResult, ShapeCategory};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Counts of classified triangles.
///
/// `right` is tallied independently of the three shape slots, so
/// `isosceles + equilateral + scalene` is the number of triangles classified
/// and `right` is a subset of them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountVector {
    pub isosceles: u64,
    pub equilateral: u64,
    pub right: u64,
    pub scalene: u64,
}

/// One labelled row of a [`CountVector`], in panel order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountEntry {
    pub label: &'static str,
    pub count: u64,
    /// False for categories that print poorly (scalene).
    pub printable: bool,
}

impl CountVector {
    pub const ZERO: CountVector = CountVector {
        isosceles: 0,
        equilateral: 0,
        right: 0,
        scalene: 0,
    };

    pub const fn new(isosceles: u64, equilateral: u64, right: u64, scalene: u64) -> Self {
        Self {
            isosceles,
            equilateral,
            right,
            scalene,
        }
    }

    /// Slots as `[isosceles, equilateral, right, scalene]`.
    pub fn to_array(self) -> [u64; 4] {
        [self.isosceles, self.equilateral, self.right, self.scalene]
    }

    /// Bump one shape slot, and `right` if flagged.
    pub fn record(&mut self, result: ClassificationResult) {
        match result.shape {
            ShapeCategory::Equilateral => self.equilateral += 1,
            ShapeCategory::Isosceles => self.isosceles += 1,
            ShapeCategory::Scalene => self.scalene += 1,
        }
        if result.right {
            self.right += 1;
        }
    }

    /// Number of triangles that were classified.
    pub fn triangles(&self) -> u64 {
        self.isosceles + self.equilateral + self.scalene
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::ZERO
    }

    /// `isosceles + equilateral + right + 2 * scalene`.
    ///
    /// Scalene faces are weighted double and right triangles are counted on
    /// top of their shape slot; both are part of the metric's definition.
    pub fn estimated_print(&self) -> u64 {
        self.isosceles + self.equilateral + self.right + 2 * self.scalene
    }

    /// Panel rows: Isosceles, Equilateral, Right, Scalene.
    pub fn entries(&self) -> [CountEntry; 4] {
        [
            CountEntry {
                label: "Isosceles",
                count: self.isosceles,
                printable: true,
            },
            CountEntry {
                label: "Equilateral",
                count: self.equilateral,
                printable: true,
            },
            CountEntry {
                label: "Right",
                count: self.right,
                printable: true,
            },
            CountEntry {
                label: "Scalene",
                count: self.scalene,
                printable: false,
            },
        ]
    }
}

impl From<[u64; 4]> for CountVector {
    fn from(v: [u64; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl AddAssign for CountVector {
    fn add_assign(&mut self, rhs: CountVector) {
        self.isosceles += rhs.isosceles;
        self.equilateral += rhs.equilateral;
        self.right += rhs.right;
        self.scalene += rhs.scalene;
    }
}

impl Add for CountVector {
    type Output = CountVector;

    fn add(mut self, rhs: CountVector) -> CountVector {
        self += rhs;
        self
    }
}

impl Sum for CountVector {
    fn sum<I: Iterator<Item = CountVector>>(iter: I) -> Self {
        iter.fold(CountVector::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a CountVector> for CountVector {
    fn sum<I: Iterator<Item = &'a CountVector>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for CountVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.entries() {
            writeln!(f, "{}: {}", entry.label, entry.count)?;
        }
        write!(f, "Estimated Print: {}", self.estimated_print())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimated_print_double_counts_scalene() {
        assert_eq!(CountVector::new(2, 1, 3, 4).estimated_print(), 14);
        assert_eq!(CountVector::ZERO.estimated_print(), 0);
    }

    #[test]
    fn record_increments_shape_and_right_independently() {
        let mut v = CountVector::default();
        v.record(ClassificationResult {
            shape: ShapeCategory::Isosceles,
            right: true,
        });
        v.record(ClassificationResult {
            shape: ShapeCategory::Scalene,
            right: false,
        });
        assert_eq!(v, CountVector::new(1, 0, 1, 1));
        assert_eq!(v.triangles(), 2);
    }

    #[test]
    fn sum_is_elementwise() {
        let groups = [CountVector::new(1, 2, 3, 4), CountVector::new(10, 0, 0, 1)];
        let total: CountVector = groups.iter().sum();
        assert_eq!(total.to_array(), [11, 2, 3, 5]);
        assert!(std::iter::empty::<CountVector>().sum::<CountVector>().is_empty());
    }

    #[test]
    fn panel_text() {
        let v = CountVector::from([2, 1, 3, 4]);
        let text = v.to_string();
        assert_eq!(
            text,
            "Isosceles: 2\nEquilateral: 1\nRight: 3\nScalene: 4\nEstimated Print: 14"
        );
        let flagged: Vec<_> = v
            .entries()
            .iter()
            .filter(|e| !e.printable)
            .map(|e| e.label)
            .collect();
        assert_eq!(flagged, ["Scalene"]);
    }
}
