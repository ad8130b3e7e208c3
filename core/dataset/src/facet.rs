//! FILENAME: core/dataset/src/facet.rs
//! PURPOSE: Names the categorical and numeric columns of a patient record.
//! CONTEXT: Facets are the dimensions a selection filters on and a group-by
//! groups on. Measures are the numeric columns a boxplot summarizes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::record::Record;

/// Raised when a facet or measure name does not match any known column.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind}: {name}")]
pub struct FacetParseError {
    pub kind: &'static str,
    pub name: String,
}

// ============================================================================
// FACET
// ============================================================================

/// A categorical dimension of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    AgeGroup,
    Gender,
    Condition,
    BpLevel,
    CholesterolLevel,
}

impl Facet {
    /// Every facet, in column order of the source table.
    pub const ALL: [Facet; 5] = [
        Facet::AgeGroup,
        Facet::Gender,
        Facet::BpLevel,
        Facet::CholesterolLevel,
        Facet::Condition,
    ];

    /// Facets the dashboard offers as filter selectors.
    pub const SELECTORS: [Facet; 2] = [Facet::AgeGroup, Facet::Gender];

    /// Column header used in the source file.
    pub fn column_name(self) -> &'static str {
        match self {
            Facet::AgeGroup => "age_group",
            Facet::Gender => "gender",
            Facet::Condition => "condition",
            Facet::BpLevel => "bp_level",
            Facet::CholesterolLevel => "cholesterol_level",
        }
    }

    /// Position of this facet inside `Facet::ALL` (used to index per-facet storage).
    pub(crate) fn slot(self) -> usize {
        match self {
            Facet::AgeGroup => 0,
            Facet::Gender => 1,
            Facet::BpLevel => 2,
            Facet::CholesterolLevel => 3,
            Facet::Condition => 4,
        }
    }

    /// Reads this facet's value from a record.
    pub fn value_of(self, record: &Record) -> &str {
        match self {
            Facet::AgeGroup => &record.age_group,
            Facet::Gender => &record.gender,
            Facet::Condition => &record.condition,
            Facet::BpLevel => &record.bp_level,
            Facet::CholesterolLevel => &record.cholesterol_level,
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for Facet {
    type Err = FacetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Facet::ALL
            .into_iter()
            .find(|facet| facet.column_name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FacetParseError {
                kind: "facet",
                name: s.to_string(),
            })
    }
}

// ============================================================================
// MEASURE
// ============================================================================

/// A numeric column of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    Age,
    Systolic,
    Cholesterol,
}

impl Measure {
    pub const ALL: [Measure; 3] = [Measure::Age, Measure::Systolic, Measure::Cholesterol];

    pub fn column_name(self) -> &'static str {
        match self {
            Measure::Age => "age",
            Measure::Systolic => "systolic",
            Measure::Cholesterol => "cholesterol",
        }
    }

    pub fn value_of(self, record: &Record) -> i64 {
        match self {
            Measure::Age => record.age,
            Measure::Systolic => record.systolic,
            Measure::Cholesterol => record.cholesterol,
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for Measure {
    type Err = FacetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Measure::ALL
            .into_iter()
            .find(|measure| measure.column_name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FacetParseError {
                kind: "measure",
                name: s.to_string(),
            })
    }
}
