//! FILENAME: core/dataset/src/record.rs
//! PURPOSE: A single patient visit, fully typed.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// `bp_level` value that marks a high blood pressure reading.
pub const BP_HIGH: &str = "High";

/// `cholesterol_level` value counted as high cholesterol.
pub const CHOLESTEROL_BORDERLINE_HIGH: &str = "Borderline High";

/// One patient visit. Every field is populated; there are no nulls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub age: i64,
    pub age_group: String,
    pub gender: String,
    /// Systolic blood pressure in mmHg.
    pub systolic: i64,
    /// Total cholesterol in mg/dL.
    pub cholesterol: i64,
    pub bp_level: String,
    pub cholesterol_level: String,
    pub condition: String,
    pub visit_date: NaiveDate,
}

impl Record {
    pub fn is_bp_high(&self) -> bool {
        self.bp_level == BP_HIGH
    }

    pub fn is_cholesterol_borderline_high(&self) -> bool {
        self.cholesterol_level == CHOLESTEROL_BORDERLINE_HIGH
    }

    /// High blood pressure or borderline-high cholesterol.
    pub fn is_high_risk(&self) -> bool {
        self.is_bp_high() || self.is_cholesterol_borderline_high()
    }

    /// Calendar month of the visit (1-12).
    pub fn visit_month(&self) -> u32 {
        self.visit_date.month()
    }

    pub fn visit_year(&self) -> i32 {
        self.visit_date.year()
    }
}
