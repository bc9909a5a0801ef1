use thiserror::Error;

/// Errors produced by the eye metric computations.
///
/// None of these are retried internally. `InvalidInput` is an integration
/// error (wrong landmark count); `DegenerateGeometry` means the frame should
/// be skipped rather than scored.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EarError {
    #[error("invalid landmark input: expected {expected} values, got {got}")]
    InvalidInput { expected: usize, got: usize },

    /// A reference distance (or sum) the ratio divides by is zero or not finite.
    #[error("degenerate geometry: {reference} is {value}")]
    DegenerateGeometry { reference: &'static str, value: f64 },

    #[error("invalid eye scale: width={width}, height={height} (both must be finite and > 0)")]
    InvalidScale { width: f64, height: f64 },
}
