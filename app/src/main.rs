//! FILENAME: app/src/main.rs
// PURPOSE: Entry point for the dashboard binary.

use clap::Parser;
use dashboard_lib::{execute, init_logging, load_config, load_dataset, render, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_logging(&config.log_level);

    let dataset = load_dataset(&cli, &config)?;
    let report = execute(&cli, &config, &dataset)?;
    println!("{}", render(&report, &cli, &config)?);
    Ok(())
}
