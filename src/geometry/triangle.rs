//! Triangles, their edge lengths, and interior angles.
//!
//! # Vertex ordering
//! Edges are built cyclically from `[v0, v1, v2]`:
//!
//! - `a = |v1 - v0|`
//! - `b = |v2 - v1|`
//! - `c = |v0 - v2|`
//!
//! Angles come from the Law of Cosines, `alpha` opposite `a`, `beta` opposite
//! `b`, `gamma` opposite `c`, all in degrees.
//!
//! # Degenerate triangles
//! For zero-length edges or collinear vertices the cosine argument can drift
//! outside `[-1, 1]` or become `0/0`. [`EdgeLengths::interior_angles`] clamps
//! to `[-1, 1]` and maps an undefined argument to 0°, so it never returns NaN
//! for finite input.
//!
//! # Magnitude
//! Lengths, cosines and the degeneracy test rescale by powers of two before
//! squaring, so coordinates anywhere in the finite `f64` range classify the
//! same as their unit-sized counterparts.

use super::point::{Point3, binary_exponent, cross, max_abs, norm, scale_pow2};

const EPS: f64 = 1e-12;

/// A face with exactly three vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [Point3; 3],
}

impl Triangle {
    pub const fn new(v0: Point3, v1: Point3, v2: Point3) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Build a triangle from a polygon, or `None` if it does not have exactly
    /// three vertices.
    pub fn from_polygon(polygon: &[Point3]) -> Option<Self> {
        match *polygon {
            [v0, v1, v2] => Some(Self::new(v0, v1, v2)),
            _ => None,
        }
    }

    /// Cyclic edge lengths `(|v1-v0|, |v2-v1|, |v0-v2|)`.
    pub fn edge_lengths(&self) -> EdgeLengths {
        let [v0, v1, v2] = self.vertices;
        EdgeLengths {
            a: v1.distance(v0),
            b: v2.distance(v1),
            c: v0.distance(v2),
        }
    }

    /// Unsigned area from the cross product of two edges.
    ///
    /// May be `inf` when the true area exceeds `f64::MAX`.
    pub fn area(&self) -> f64 {
        let (u, w, e) = self.unit_edge_vectors();
        scale_pow2(0.5 * norm(cross(u, w)), 2 * e)
    }

    /// Edge vectors `v1 - v0` and `v2 - v0` divided by `2^e`, with `e`
    /// chosen so their largest component is of order one.
    fn unit_edge_vectors(&self) -> ([f64; 3], [f64; 3], i32) {
        let [v0, v1, v2] = self.vertices;
        let u = (v1 - v0).to_array();
        let w = (v2 - v0).to_array();
        let m = max_abs(u).max(max_abs(w));
        if m == 0.0 || !m.is_finite() {
            return (u, w, 0);
        }
        let e = binary_exponent(m);
        (u.map(|x| scale_pow2(x, -e)), w.map(|x| scale_pow2(x, -e)), e)
    }

    /// Index of the first vertex with a NaN or infinite component.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.vertices.iter().position(|v| !v.is_finite())
    }

    /// True for zero-length edges or (numerically) collinear vertices.
    ///
    /// Collinearity is judged against the squared longest edge, so the test
    /// does not depend on the triangle's scale.
    pub fn is_degenerate(&self) -> bool {
        let edges = self.edge_lengths();
        let longest = edges.longest();
        if longest == 0.0 || edges.shortest() <= EPS * longest {
            return true;
        }
        // Compare area to longest^2 in the rescaled frame.
        let (u, w, e) = self.unit_edge_vectors();
        let unit_longest = scale_pow2(longest, -e);
        0.5 * norm(cross(u, w)) <= EPS * unit_longest * unit_longest
    }

    /// Rotate the vertex order by one: `[v1, v2, v0]`.
    pub fn rotated(&self) -> Self {
        let [v0, v1, v2] = self.vertices;
        Self::new(v1, v2, v0)
    }

    /// Reverse the winding: `[v0, v2, v1]`.
    pub fn reflected(&self) -> Self {
        let [v0, v1, v2] = self.vertices;
        Self::new(v0, v2, v1)
    }
}

/// Edge lengths `(a, b, c)` of a triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeLengths {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl EdgeLengths {
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    pub fn longest(&self) -> f64 {
        self.a.max(self.b).max(self.c)
    }

    pub fn shortest(&self) -> f64 {
        self.a.min(self.b).min(self.c)
    }

    /// Interior angles `[alpha, beta, gamma]` in degrees, clamped.
    pub fn interior_angles(&self) -> [f64; 3] {
        let EdgeLengths { a, b, c } = self.normalized();
        [
            law_of_cosines_deg(a, b, c),
            law_of_cosines_deg(b, c, a),
            law_of_cosines_deg(c, a, b),
        ]
    }

    /// Raw cosine arguments before clamping, in the same order as
    /// [`interior_angles`](Self::interior_angles).
    pub fn cosines(&self) -> [f64; 3] {
        let EdgeLengths { a, b, c } = self.normalized();
        [cosine_arg(a, b, c), cosine_arg(b, c, a), cosine_arg(c, a, b)]
    }

    /// Divide by the power of two nearest below the longest edge.
    ///
    /// Exact for normal floats, so cosines are unchanged where squaring the
    /// raw lengths would not overflow or underflow.
    fn normalized(&self) -> EdgeLengths {
        let longest = self.longest();
        if longest == 0.0 || !longest.is_finite() {
            return *self;
        }
        let e = binary_exponent(longest);
        EdgeLengths {
            a: scale_pow2(self.a, -e),
            b: scale_pow2(self.b, -e),
            c: scale_pow2(self.c, -e),
        }
    }
}

/// Cosine of the angle opposite `opposite`, between sides `s1` and `s2`.
#[inline]
fn cosine_arg(opposite: f64, s1: f64, s2: f64) -> f64 {
    (s1 * s1 + s2 * s2 - opposite * opposite) / (2.0 * s1 * s2)
}

fn law_of_cosines_deg(opposite: f64, s1: f64, s2: f64) -> f64 {
    let cos = cosine_arg(opposite, s1, s2);
    if cos.is_nan() {
        return 0.0;
    }
    cos.clamp(-1.0, 1.0).acos().to_degrees()
}
