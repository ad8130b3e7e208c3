//! FILENAME: app/src/cli.rs
// PURPOSE: Command-line surface of the `dashboard` binary.

use std::path::PathBuf;

use analytics_engine::FilterSelection;
use clap::Parser;
use dataset::{Dataset, Facet};

/// Patient health dashboard: filters a patient CSV and prints the report as JSON.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "dashboard", version, about)]
pub struct Cli {
    /// JSON configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Patient CSV file (overrides the config)
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Age group to include; repeat to select several
    #[arg(long = "age-group", value_name = "VALUE")]
    pub age_groups: Vec<String>,

    /// Gender to include; repeat to select several
    #[arg(long = "gender", value_name = "VALUE")]
    pub genders: Vec<String>,

    /// Select nothing for a facet (e.g. `--none gender`)
    #[arg(long = "none", value_name = "FACET")]
    pub none: Vec<Facet>,

    /// Pretty-print the report
    #[arg(long)]
    pub pretty: bool,

    /// Also write the filtered table to this CSV file
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,
}

impl Cli {
    /// Layers the selection: every selector value, then the configured
    /// defaults, then the command line. `--none` wins over listed values.
    pub fn selection(&self, dataset: &Dataset, defaults: &FilterSelection) -> FilterSelection {
        let mut selection = FilterSelection::all(dataset);

        for facet in defaults.facets() {
            if let Some(values) = defaults.values(facet) {
                selection.set(facet, values.iter().cloned());
            }
        }

        if !self.age_groups.is_empty() {
            selection.set(Facet::AgeGroup, self.age_groups.iter().cloned());
        }
        if !self.genders.is_empty() {
            selection.set(Facet::Gender, self.genders.iter().cloned());
        }
        for &facet in &self.none {
            selection = selection.with_none(facet);
        }

        selection
    }
}
