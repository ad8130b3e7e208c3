//! FILENAME: app/src/lib.rs
// PURPOSE: Library root for the dashboard process. Loads the dataset once,
// resolves the selection and hands back the report for the presentation layer.

use std::fs::File;
use std::path::PathBuf;

use analytics_engine::{build_report, DashboardReport};
use anyhow::Context;
use dataset::Dataset;

pub mod cli;
pub mod config;
pub mod logging;

pub use cli::Cli;
pub use config::{ConfigError, DashboardConfig};
pub use logging::init_logging;

/// Config file from `--config`, or defaults when none is given.
pub fn load_config(cli: &Cli) -> anyhow::Result<DashboardConfig> {
    match &cli.config {
        Some(path) => Ok(DashboardConfig::load(path)?),
        None => Ok(DashboardConfig::default()),
    }
}

pub fn data_path(cli: &Cli, config: &DashboardConfig) -> PathBuf {
    cli.data.clone().unwrap_or_else(|| config.data_path.clone())
}

/// Loads the dataset, failing fast when the file is unusable.
pub fn load_dataset(cli: &Cli, config: &DashboardConfig) -> anyhow::Result<Dataset> {
    let path = data_path(cli, config);
    persistence::load_csv(&path)
        .with_context(|| format!("Failed to load patient data from {}", path.display()))
}

/// Builds the report for the resolved selection and runs the optional export.
pub fn execute(cli: &Cli, config: &DashboardConfig, dataset: &Dataset) -> anyhow::Result<DashboardReport> {
    let selection = cli.selection(dataset, &config.default_selection);
    let report = build_report(dataset, &selection);
    log::info!(
        "Report ready: {} of {} patients selected",
        report.kpis.total_patients,
        dataset.len()
    );

    if let Some(path) = &cli.export {
        let file = File::create(path)
            .with_context(|| format!("Failed to create export file {}", path.display()))?;
        let written = persistence::write_csv(&report.table, file)
            .with_context(|| format!("Failed to export table to {}", path.display()))?;
        log::info!("Exported {} rows to {}", written, path.display());
    }

    Ok(report)
}

/// Serializes the report, pretty if either the flag or the config asks for it.
pub fn render(report: &DashboardReport, cli: &Cli, config: &DashboardConfig) -> anyhow::Result<String> {
    let json = if cli.pretty || config.pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(json)
}
