mod util;
use face_classify::prelude::*;
use util::*;

#[test]
fn equilateral_is_not_right() {
    let t = Triangle::from_polygon(&equilateral()).expect("triangle");
    for c in [exact(), tolerant()] {
        let r = c.classify(&t);
        assert_eq!(r.shape, ShapeCategory::Equilateral);
        assert!(!r.right);
    }
}

#[test]
fn approximate_equilateral_with_configured_tolerance() {
    let t = tri([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, 0.866, 0.0]);
    let cfg = ClassifierConfig {
        sides: Comparison::Tolerance(1e-4),
        ..ClassifierConfig::tolerant()
    };
    let r = TriangleClassifier::new(cfg).unwrap().classify(&t);
    assert_eq!(r.shape, ShapeCategory::Equilateral);
    assert!(!r.right);
}

/// Exact comparison misses this right angle; tolerance catches it.
#[test]
fn right_isosceles_exact_vs_tolerance() {
    let t = Triangle::from_polygon(&right_isosceles()).expect("triangle");

    let strict = exact().classify(&t);
    assert_eq!(strict.shape, ShapeCategory::Isosceles);
    assert!(!strict.right, "exact 90.0 comparison is expected to miss");

    let tol = tolerant().classify(&t);
    assert_eq!(tol.shape, ShapeCategory::Isosceles);
    assert!(tol.right);
}

#[test]
fn three_four_five_right_scalene() {
    let t = Triangle::from_polygon(&right_scalene()).expect("triangle");
    let r = tolerant().classify(&t);
    assert_eq!(r.shape, ShapeCategory::Scalene);
    assert!(r.right);
}

#[test]
fn rotated_right_triangle_needs_tolerance() {
    // A 3-4-5 triangle rotated 30 degrees about z.
    let (s, c) = 30f64.to_radians().sin_cos();
    let rot = |x: f64, y: f64| [x * c - y * s, x * s + y * c, 0.0];
    let t = tri(rot(0.0, 0.0), rot(3.0, 0.0), rot(0.0, 4.0));
    let r = tolerant().classify(&t);
    assert_eq!(r.shape, ShapeCategory::Scalene);
    assert!(r.right);
}

#[test]
fn shape_invariant_under_permutation() {
    let cases = [
        equilateral(),
        right_isosceles(),
        right_scalene(),
        poly(&[[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [1.0, 5.0, 0.0]]),
        poly(&[[1.0, 2.0, 3.0], [-4.0, 0.0, 2.0], [7.0, 1.0, -1.0]]),
    ];
    for polygon in &cases {
        let t = Triangle::from_polygon(polygon).expect("triangle");
        for c in [exact(), tolerant()] {
            let base = c.classify(&t);
            for perm in permutations(&t) {
                assert_eq!(c.classify(&perm), base, "{perm:?}");
            }
        }
    }
}

#[test]
fn isosceles_apex_not_at_origin() {
    let t = tri([0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [1.0, 5.0, 0.0]);
    let r = exact().classify(&t);
    assert_eq!(r.shape, ShapeCategory::Isosceles);
    assert!(!r.right);
}

#[test]
fn skip_policy_reports_degenerate() {
    let cfg = ClassifierConfig {
        degenerate: DegeneratePolicy::Skip,
        ..ClassifierConfig::tolerant()
    };
    let c = TriangleClassifier::new(cfg).unwrap();
    let t = tri([0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [2.0, 2.0, 2.0]);
    let err = c.classify_checked(&t).unwrap_err();
    assert!(matches!(err, FaceClassError::DegenerateGeometry { .. }));

    // The infallible form still clamps.
    let r = c.classify(&t);
    assert_eq!(r.shape, ShapeCategory::Isosceles);
    assert!(!r.right);
}

#[test]
fn extreme_scales_match_unit_classification() {
    let base = Triangle::from_polygon(&right_scalene()).expect("triangle");
    let c = tolerant();
    for k in [1e200, 1e-300] {
        let [a, b, v] = base.vertices;
        let scaled = Triangle::new(a.scaled(k), b.scaled(k), v.scaled(k));
        assert_eq!(c.classify(&scaled), c.classify(&base), "scale {k}");
    }

    let huge = MeshGroup::from_arrays(
        "huge",
        &[vec![[-1e200, 0.0, 0.0], [1e200, 0.0, 0.0], [0.0, 1e200, 0.0]]],
    )
    .unwrap();
    let tiny = MeshGroup::from_arrays(
        "tiny",
        &[vec![[0.0, 0.0, 0.0], [1e-300, 0.0, 0.0], [0.0, 1e-300, 0.0]]],
    )
    .unwrap();
    let acc = ClassificationAccumulator::with_config(ClassifierConfig {
        degenerate: DegeneratePolicy::Skip,
        ..ClassifierConfig::tolerant()
    })
    .unwrap();
    let report = acc.scan_selection(&[huge, tiny]).unwrap();
    assert_eq!(report.total, CountVector::new(2, 0, 2, 0));
    assert_eq!(report.degenerate, 0);
}
