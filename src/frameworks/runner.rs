// Framework bootstrap for the simulation runtime.

use crate::frameworks::config::{ConfigError, ReportFormat, SimulationConfig};
use crate::interface_adapters::report::{render_json, render_text};
use crate::interface_adapters::utils::rng::SeededRandom;
use crate::use_cases::{ArenaError, SimulationReport, run_simulation};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("simulation failed: {0}")]
    Arena(#[from] ArenaError),
    #[error("failed to render report: {0}")]
    Report(#[from] serde_json::Error),
}

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Runs one full simulation with the given config.
pub async fn run(config: &SimulationConfig) -> Result<SimulationReport, ArenaError> {
    let mut world_rng = match config.seed {
        Some(seed) => SeededRandom::new(seed),
        None => SeededRandom::from_clock(),
    };
    // The driver's fire rolls use their own stream so the world stream only
    // depends on the commands it receives.
    let driver_rng = world_rng.fork();
    tracing::info!(
        seed = world_rng.seed(),
        width = config.width,
        height = config.height,
        "arena configured"
    );

    run_simulation(&config.plan(), world_rng, driver_rng).await
}

/// Renders the final report in the configured format.
pub fn render(config: &SimulationConfig, report: &SimulationReport) -> Result<String, RunError> {
    match config.report_format {
        ReportFormat::Text => Ok(render_text(report)),
        ReportFormat::Json => Ok(render_json(report)?),
    }
}

/// Loads `.env`, installs logging, reads the config and runs to completion.
pub async fn run_with_config() -> Result<String, RunError> {
    init_runtime();

    let config = SimulationConfig::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
    })?;

    let report = run(&config).await.inspect_err(|e| {
        tracing::error!(error = %e, "simulation error");
    })?;

    render(&config, &report)
}
