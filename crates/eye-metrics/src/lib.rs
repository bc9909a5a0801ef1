//! Eye openness metrics
//!
//! Pure geometry over facial landmark points, independent of any camera,
//! detector or UI layer. The caller supplies six landmarks per eye per frame
//! and receives an Eye Aspect Ratio (EAR).
//!
//! ## Modules
//! - `point`: 2-D landmark point and Euclidean distance
//! - `ear`: six-point landmark set and EAR computation
//! - `compare`: percentage difference and left/right comparison
//! - `synthetic`: deterministic eye landmarks for calibration and checks
//! - `error`: error kinds surfaced to the caller
//! - `wasm` (feature `wasm`): JavaScript bindings

pub mod compare;
pub mod ear;
pub mod error;
pub mod point;
pub mod synthetic;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use compare::{percentage_difference, BinocularEar};
pub use ear::{compute_ear, compute_ear_flat, EyeLandmarkSet, DEGENERATE_EPSILON};
pub use error::EarError;
pub use point::{distance, Point2D};
pub use synthetic::{AsymmetryCalibration, EyeScale, EyeShape};
