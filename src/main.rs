use std::process::ExitCode;

use drowsiness_monitor::config::{Config, OutputFormat};
use drowsiness_monitor::logging::{init_tracing, LogConfig};
use drowsiness_monitor::verification::run_verification;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    init_tracing(&LogConfig::from_env());
    tracing::info!("Starting drowsiness-monitor");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::from(2);
        }
    };
    tracing::debug!(?config, "Loaded configuration");

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Invalid configuration");
        return ExitCode::from(2);
    }

    let report = match run_verification(&config.verification) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(error = %e, "Verification failed to run");
            return ExitCode::from(2);
        }
    };

    match config.output_format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize report");
                return ExitCode::from(2);
            }
        },
    }

    if report.passed {
        tracing::info!("Verification passed");
        ExitCode::SUCCESS
    } else {
        tracing::warn!("Verification failed: calibrated eyes are indistinguishable");
        ExitCode::FAILURE
    }
}
