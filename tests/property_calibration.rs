use proptest::prelude::*;

use drowsiness_monitor::config::VerificationConfig;
use drowsiness_monitor::verification::run_verification;

proptest! {
    #[test]
    fn pt_distinct_aspect_factors_pass(
        lw in 0.5_f64..1.5,
        lh in 0.5_f64..1.5,
        rw in 0.5_f64..1.5,
        rh in 0.5_f64..1.5,
    ) {
        // EAR of a generated eye is h / w, so the calibrated eyes differ
        // whenever the height/width factor ratios do.
        prop_assume!((lh / lw - rh / rw).abs() > 1e-6);
        let config = VerificationConfig {
            left_width_scale: lw,
            left_height_scale: lh,
            right_width_scale: rw,
            right_height_scale: rh,
            ..VerificationConfig::default()
        };
        let report = run_verification(&config).unwrap();
        prop_assert!(report.passed);
        prop_assert!(report.calibrated.percentage_difference > 0.0);
    }

    #[test]
    fn pt_reported_ears_are_non_negative(
        width in 1.0_f64..100.0,
        height in 0.1_f64..50.0,
        cx in -500.0_f64..500.0,
    ) {
        let config = VerificationConfig {
            base_eye_width: width,
            base_eye_height: height,
            left_center_x: cx,
            ..VerificationConfig::default()
        };
        let report = run_verification(&config).unwrap();
        for scenario in [&report.baseline, &report.calibrated] {
            prop_assert!(scenario.left_ear >= 0.0);
            prop_assert!(scenario.right_ear >= 0.0);
            prop_assert!(scenario.percentage_difference >= 0.0);
        }
    }
}
