pub mod config;
pub mod error;
pub mod logging;
pub mod verification;

pub use eye_metrics;
