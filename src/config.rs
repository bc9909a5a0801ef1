use std::env;
use std::fmt;
use std::str::FromStr;

use eye_metrics::{AsymmetryCalibration, EyeScale, Point2D};

use crate::error::AppError;
use crate::logging::LogConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub log: LogConfig,
    pub output_format: OutputFormat,
    pub verification: VerificationConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Synthetic eye geometry and the per-eye calibration applied to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerificationConfig {
    pub base_eye_width: f64,
    pub base_eye_height: f64,
    pub left_center_x: f64,
    pub right_center_x: f64,
    pub center_y: f64,
    pub left_width_scale: f64,
    pub left_height_scale: f64,
    pub right_width_scale: f64,
    pub right_height_scale: f64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        let cal = AsymmetryCalibration::default();
        Self {
            base_eye_width: 20.0,
            base_eye_height: 10.0,
            left_center_x: 320.0,
            right_center_x: 380.0,
            center_y: 240.0,
            left_width_scale: cal.left.width(),
            left_height_scale: cal.left.height(),
            right_width_scale: cal.right.width(),
            right_height_scale: cal.right.height(),
        }
    }
}

impl VerificationConfig {
    /// Reads the `EAR_*` keys. A value that is set but does not parse is an
    /// error, never a silent fallback to the default geometry.
    pub fn from_env() -> Result<Self, AppError> {
        let d = Self::default();
        Ok(Self {
            base_eye_width: env_parse_strict("EAR_BASE_EYE_WIDTH", d.base_eye_width)?,
            base_eye_height: env_parse_strict("EAR_BASE_EYE_HEIGHT", d.base_eye_height)?,
            left_center_x: env_parse_strict("EAR_LEFT_CENTER_X", d.left_center_x)?,
            right_center_x: env_parse_strict("EAR_RIGHT_CENTER_X", d.right_center_x)?,
            center_y: env_parse_strict("EAR_CENTER_Y", d.center_y)?,
            left_width_scale: env_parse_strict("EAR_LEFT_WIDTH_SCALE", d.left_width_scale)?,
            left_height_scale: env_parse_strict("EAR_LEFT_HEIGHT_SCALE", d.left_height_scale)?,
            right_width_scale: env_parse_strict("EAR_RIGHT_WIDTH_SCALE", d.right_width_scale)?,
            right_height_scale: env_parse_strict(
                "EAR_RIGHT_HEIGHT_SCALE",
                d.right_height_scale,
            )?,
        })
    }

    pub fn left_center(&self) -> Point2D {
        Point2D::new(self.left_center_x, self.center_y)
    }

    pub fn right_center(&self) -> Point2D {
        Point2D::new(self.right_center_x, self.center_y)
    }

    pub fn calibration(&self) -> Result<AsymmetryCalibration, AppError> {
        Ok(AsymmetryCalibration {
            left: EyeScale::new(self.left_width_scale, self.left_height_scale)?,
            right: EyeScale::new(self.right_width_scale, self.right_height_scale)?,
        })
    }

    pub fn validate(&self) -> Result<(), AppError> {
        for (name, value) in [
            ("EAR_BASE_EYE_WIDTH", self.base_eye_width),
            ("EAR_BASE_EYE_HEIGHT", self.base_eye_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(AppError::InvalidConfig(format!(
                    "{name} must be finite and > 0, got {value}"
                )));
            }
        }
        for (name, value) in [
            ("EAR_LEFT_CENTER_X", self.left_center_x),
            ("EAR_RIGHT_CENTER_X", self.right_center_x),
            ("EAR_CENTER_Y", self.center_y),
        ] {
            if !value.is_finite() {
                return Err(AppError::InvalidConfig(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        self.calibration().map(|_| ())
    }
}

impl Config {
    /// Install tracing from [`LogConfig::from_env`] before calling this so
    /// fallback warnings are not lost.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            log: LogConfig::from_env(),
            output_format: env_or_parse("OUTPUT_FORMAT", OutputFormat::Text),
            verification: VerificationConfig::from_env()?,
        })
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.verification.validate()
    }
}

pub fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

pub fn env_or_parse<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    match env::var(key) {
        Ok(raw) => match raw.trim().parse::<T>() {
            Ok(v) => v,
            Err(_) => {
                tracing::warn!(
                    key,
                    value = %raw,
                    "Failed to parse env var, using default"
                );
                default
            }
        },
        Err(_) => default,
    }
}

pub fn env_parse_strict<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| AppError::InvalidConfig(format!("{key}={raw:?} is not a valid value"))),
        Err(_) => Ok(default),
    }
}

pub fn env_or_bool(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        Err(_) => default,
    }
}
