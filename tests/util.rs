#![allow(dead_code)]
use face_classify::prelude::*;

pub fn p(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}

pub fn tri(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> Triangle {
    Triangle::new(a.into(), b.into(), c.into())
}

pub fn poly(points: &[[f64; 3]]) -> Polygon {
    points.iter().copied().map(Point3::from).collect()
}

pub fn exact() -> TriangleClassifier {
    TriangleClassifier::default()
}

pub fn tolerant() -> TriangleClassifier {
    TriangleClassifier::new(ClassifierConfig::tolerant()).unwrap()
}

/// Unit right isosceles triangle in the XY plane.
pub fn right_isosceles() -> Polygon {
    poly(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]])
}

/// 3-4-5 right triangle.
pub fn right_scalene() -> Polygon {
    poly(&[[0.0, 0.0, 0.0], [3.0, 0.0, 0.0], [0.0, 4.0, 0.0]])
}

/// Equilateral triangle whose edges are all computed from the same sums.
pub fn equilateral() -> Polygon {
    poly(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
}

pub fn unit_quad() -> Polygon {
    poly(&[
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
    ])
}

/// Every vertex-order permutation of a triangle.
pub fn permutations(t: &Triangle) -> Vec<Triangle> {
    let [a, b, c] = t.vertices;
    vec![
        Triangle::new(a, b, c),
        Triangle::new(a, c, b),
        Triangle::new(b, a, c),
        Triangle::new(b, c, a),
        Triangle::new(c, a, b),
        Triangle::new(c, b, a),
    ]
}
