use proptest::prelude::*;

use eye_metrics::{compute_ear, percentage_difference, EarError, EyeLandmarkSet, Point2D};

fn coord() -> impl Strategy<Value = f64> {
    -1000.0_f64..1000.0
}

fn any_eye() -> impl Strategy<Value = [Point2D; 6]> {
    prop::array::uniform6((coord(), coord()).prop_map(Point2D::from))
}

/// An eye whose vertical pairs share an x coordinate around a horizontal
/// corner line, so vertical spans are pure y offsets from `cy`.
fn aligned_eye(
    cx: f64,
    cy: f64,
    width: f64,
    offsets: [f64; 4],
) -> [Point2D; 6] {
    let [up_outer, up_inner, low_inner, low_outer] = offsets;
    [
        Point2D::new(cx - width / 2.0, cy),
        Point2D::new(cx - width / 4.0, cy - up_outer),
        Point2D::new(cx + width / 4.0, cy - up_inner),
        Point2D::new(cx + width / 2.0, cy),
        Point2D::new(cx + width / 4.0, cy + low_inner),
        Point2D::new(cx - width / 4.0, cy + low_outer),
    ]
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn pt_ear_is_deterministic(points in any_eye()) {
        let first = compute_ear(&points);
        let second = compute_ear(&points);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn pt_ear_non_negative_or_degenerate(points in any_eye()) {
        match compute_ear(&points) {
            Ok(ear) => {
                prop_assert!(ear >= 0.0);
                prop_assert!(ear.is_finite());
            }
            Err(EarError::DegenerateGeometry { .. }) => {
                let set = EyeLandmarkSet::new(points);
                prop_assert!(set.horizontal() <= eye_metrics::DEGENERATE_EPSILON);
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    #[test]
    fn pt_vertical_scaling_is_linear(
        cx in coord(),
        cy in coord(),
        width in 1.0_f64..200.0,
        offsets in prop::array::uniform4(0.0_f64..50.0),
        k in 0.05_f64..20.0,
    ) {
        let base = compute_ear(&aligned_eye(cx, cy, width, offsets)).unwrap();
        let stretched = offsets.map(|o| o * k);
        let scaled = compute_ear(&aligned_eye(cx, cy, width, stretched)).unwrap();
        prop_assert!(close(scaled, base * k), "base={base} scaled={scaled} k={k}");
    }

    #[test]
    fn pt_uniform_scaling_is_invariant(points in any_eye(), k in 0.1_f64..10.0) {
        let set = EyeLandmarkSet::new(points);
        prop_assume!(set.horizontal() > 1.0);
        let base = set.ear().unwrap();
        let scaled = set.scaled(k).ear().unwrap();
        prop_assert!(close(base, scaled), "base={base} scaled={scaled} k={k}");
    }

    #[test]
    fn pt_position_does_not_change_ear(
        points in any_eye(),
        dx in coord(),
        dy in coord(),
        axis in coord(),
    ) {
        let set = EyeLandmarkSet::new(points);
        prop_assume!(set.horizontal() > 1.0);
        let base = set.ear().unwrap();
        prop_assert!(close(base, set.translated(dx, dy).ear().unwrap()));
        prop_assert!(close(base, set.mirrored(axis).ear().unwrap()));
    }

    #[test]
    fn pt_coincident_corners_always_fail(points in any_eye()) {
        let mut points = points;
        points[3] = points[0];
        let result = compute_ear(&points);
        prop_assert!(
            matches!(result, Err(EarError::DegenerateGeometry { .. })),
            "expected degenerate geometry, got {result:?}"
        );
    }

    #[test]
    fn pt_wrong_length_is_invalid_input(len in 0_usize..16) {
        prop_assume!(len != 6);
        let points = vec![Point2D::new(1.0, 2.0); len];
        prop_assert_eq!(
            compute_ear(&points),
            Err(EarError::InvalidInput { expected: 6, got: len })
        );
    }

    #[test]
    fn pt_self_difference_is_zero(
        x in prop_oneof![
            1e-300_f64..1e-3,
            0.001_f64..100.0,
            -100.0_f64..-1e-300,
        ]
    ) {
        prop_assert_eq!(percentage_difference(x, x).unwrap(), 0.0);
    }
}
