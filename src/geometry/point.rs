//! Three-component points.

use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// An immutable point in 3-D space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Lift a planar point into the `z = 0` plane.
    pub const fn from_xy(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point3) -> f64 {
        norm((self - other).to_array())
    }

    /// Multiply every component by `factor`.
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }
}

impl From<[f64; 3]> for Point3 {
    fn from(xyz: [f64; 3]) -> Self {
        Self::new(xyz[0], xyz[1], xyz[2])
    }
}

impl From<Point3> for [f64; 3] {
    fn from(p: Point3) -> Self {
        p.to_array()
    }
}

impl Sub for Point3 {
    type Output = Point3;

    fn sub(self, rhs: Point3) -> Point3 {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

pub(crate) fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub(crate) fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Squaring is safe for magnitudes in `[2^-500, 2^500]`.
const SAFE_EXP: i32 = 500;

/// Euclidean norm that does not overflow or underflow while squaring.
///
/// Out-of-range vectors are rescaled by a power of two first, which is
/// exact, so the result matches the plain formula wherever that is finite.
pub(crate) fn norm(a: [f64; 3]) -> f64 {
    let m = max_abs(a);
    if m == 0.0 || !m.is_finite() {
        return dot(a, a).sqrt();
    }
    let e = binary_exponent(m);
    if e.abs() <= SAFE_EXP {
        return dot(a, a).sqrt();
    }
    let unit = a.map(|x| scale_pow2(x, -e));
    scale_pow2(dot(unit, unit).sqrt(), e)
}

pub(crate) fn max_abs(a: [f64; 3]) -> f64 {
    a[0].abs().max(a[1].abs()).max(a[2].abs())
}

/// `floor(log2(m))` for finite, non-zero `m`.
pub(crate) fn binary_exponent(m: f64) -> i32 {
    m.abs().log2().floor() as i32
}

/// `x * 2^e`, split in two steps so the factor itself never overflows.
pub(crate) fn scale_pow2(x: f64, e: i32) -> f64 {
    let half = e / 2;
    x * 2f64.powi(half) * 2f64.powi(e - half)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(4.0, 6.0, 3.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn planar_points_sit_on_z0() {
        let p = Point3::from_xy(2.0, -1.0);
        assert_eq!(p.to_array(), [2.0, -1.0, 0.0]);
        assert_eq!(Point3::from([2.0, -1.0, 0.0]), p);
    }

    #[test]
    fn cross_of_axes() {
        assert_eq!(cross([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn distance_survives_extreme_magnitudes() {
        let a = Point3::new(3e200, 0.0, 0.0);
        let b = Point3::new(0.0, 4e200, 0.0);
        let d = a.distance(b);
        assert!((d / 5e200 - 1.0).abs() < 1e-15, "{d}");

        let a = Point3::new(3e-300, 0.0, 0.0);
        let b = Point3::new(0.0, 4e-300, 0.0);
        let d = a.distance(b);
        assert!((d / 5e-300 - 1.0).abs() < 1e-15, "{d}");
    }

    #[test]
    fn power_of_two_rescaling_is_exact() {
        assert_eq!(scale_pow2(3.0, 600), 3.0 * 2f64.powi(600));
        assert_eq!(scale_pow2(scale_pow2(1.5, -1000), 1000), 1.5);
        assert_eq!(binary_exponent(1.0), 0);
        assert_eq!(binary_exponent(0.75), -1);
        // Plain-range input takes the unscaled path.
        assert_eq!(norm([1.0, 1.0, 0.0]), 2f64.sqrt());
    }

    #[test]
    fn non_finite_components_detected() {
        assert!(Point3::new(0.0, 1.0, 2.0).is_finite());
        assert!(!Point3::new(f64::NAN, 0.0, 0.0).is_finite());
        assert!(!Point3::new(0.0, f64::INFINITY, 0.0).is_finite());
    }
}
