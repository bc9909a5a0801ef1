use eye_metrics::EarError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("metric error: {0}")]
    Metric(#[from] EarError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
