//! Symmetric vs calibrated EAR comparison
//!
//! Two scenarios over synthetic eyes:
//! - baseline: both eyes share the base width/height, so their EARs match
//! - calibrated: each eye is scaled by its calibration factors, which must
//!   yield distinguishable EARs
//!
//! The run passes when the calibrated scenario differs.

use std::fmt::Write as _;

use eye_metrics::{AsymmetryCalibration, BinocularEar, EyeShape};
use serde::Serialize;

use crate::config::VerificationConfig;
use crate::error::AppError;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioReport {
    pub name: &'static str,
    pub left_eye: EyeShape,
    pub right_eye: EyeShape,
    pub left_ear: f64,
    pub right_ear: f64,
    pub abs_difference: f64,
    pub percentage_difference: f64,
    pub differs: bool,
}

impl ScenarioReport {
    fn evaluate(
        name: &'static str,
        left_eye: EyeShape,
        right_eye: EyeShape,
    ) -> Result<Self, AppError> {
        let ears = BinocularEar::from_landmarks(&left_eye.landmarks(), &right_eye.landmarks())?;
        let percentage_difference = ears.percentage_difference()?;

        tracing::info!(
            scenario = name,
            left_ear = ears.left,
            right_ear = ears.right,
            percentage_difference,
            "Computed eye aspect ratios"
        );

        Ok(Self {
            name,
            left_eye,
            right_eye,
            left_ear: ears.left,
            right_ear: ears.right,
            abs_difference: ears.abs_difference(),
            percentage_difference,
            differs: ears.differs(),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationReport {
    pub calibration: AsymmetryCalibration,
    pub baseline: ScenarioReport,
    pub calibrated: ScenarioReport,
    pub passed: bool,
}

impl VerificationReport {
    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== EYE ASPECT RATIO (EAR) COMPARISON ===");
        for scenario in [&self.baseline, &self.calibrated] {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}:", scenario.name);
            let _ = writeln!(
                out,
                "  Left eye  {:>6.2} x {:<6.2} EAR: {:.10}",
                scenario.left_eye.width, scenario.left_eye.height, scenario.left_ear
            );
            let _ = writeln!(
                out,
                "  Right eye {:>6.2} x {:<6.2} EAR: {:.10}",
                scenario.right_eye.width, scenario.right_eye.height, scenario.right_ear
            );
            let _ = writeln!(out, "  Difference: {:.10}", scenario.abs_difference);
            let _ = writeln!(
                out,
                "  Percentage difference: {:.2}%",
                scenario.percentage_difference
            );
            let _ = writeln!(out, "  Different: {}", scenario.differs);
        }
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Calibration: left {:.2}w/{:.2}h, right {:.2}w/{:.2}h",
            self.calibration.left.width(),
            self.calibration.left.height(),
            self.calibration.right.width(),
            self.calibration.right.height()
        );
        let _ = writeln!(
            out,
            "Result: {}",
            if self.passed { "PASS" } else { "FAIL" }
        );
        out
    }
}

pub fn run_verification(config: &VerificationConfig) -> Result<VerificationReport, AppError> {
    config.validate()?;
    let calibration = config.calibration()?;

    let base_left = EyeShape::new(
        config.left_center(),
        config.base_eye_width,
        config.base_eye_height,
    );
    let base_right = EyeShape::new(
        config.right_center(),
        config.base_eye_width,
        config.base_eye_height,
    );

    let baseline = ScenarioReport::evaluate("baseline (symmetric)", base_left, base_right)?;
    let calibrated = ScenarioReport::evaluate(
        "calibrated (asymmetric)",
        base_left.scaled(calibration.left),
        base_right.scaled(calibration.right),
    )?;

    let passed = calibrated.differs;
    if !passed {
        tracing::warn!(
            left_ear = calibrated.left_ear,
            right_ear = calibrated.right_ear,
            "Calibrated eyes produced identical EAR values"
        );
    }

    Ok(VerificationReport {
        calibration,
        baseline,
        calibrated,
        passed,
    })
}
