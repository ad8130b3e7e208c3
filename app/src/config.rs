//! FILENAME: app/src/config.rs
// PURPOSE: Dashboard configuration file (JSON). Every field has a default,
// so an empty object is a valid configuration.

use std::fs;
use std::path::{Path, PathBuf};

use analytics_engine::FilterSelection;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_DATA_PATH: &str = "patients.csv";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// CSV file holding the patient visits.
    pub data_path: PathBuf,
    /// Constraints applied before any command-line selection.
    /// Facets left out start with every value selected.
    pub default_selection: FilterSelection,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: String,
    pub pretty: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            default_selection: FilterSelection::new(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            pretty: false,
        }
    }
}

impl DashboardConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset::Facet;
    use std::io::Write;

    #[test]
    fn test_empty_object_is_all_defaults() {
        let config = DashboardConfig::from_json("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.log_level, "info");
        assert!(config.default_selection.is_unconstrained());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = DashboardConfig::from_json(
            r#"{ "data_path": "data/visits.csv", "default_selection": { "gender": ["Female"] } }"#,
        )
        .unwrap();

        assert_eq!(config.data_path, PathBuf::from("data/visits.csv"));
        assert!(config.default_selection.allows(Facet::Gender, "Female"));
        assert!(!config.default_selection.allows(Facet::Gender, "Male"));
        assert!(config.default_selection.allows(Facet::AgeGroup, "60+"));
        assert!(!config.pretty);
    }

    #[test]
    fn test_unknown_facet_is_rejected() {
        let result = DashboardConfig::from_json(r#"{ "default_selection": { "blood_type": ["A"] } }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_reports_path_on_failure() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = DashboardConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));

        let missing = DashboardConfig::load(Path::new("/nonexistent/dashboard.json")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));
    }
}
