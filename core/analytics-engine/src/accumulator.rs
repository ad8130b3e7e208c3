//! FILENAME: core/analytics-engine/src/accumulator.rs
//! PURPOSE: Incremental numeric reducer shared by the KPI and boxplot aggregations.

use serde::{Deserialize, Serialize};

// ============================================================================
// AVERAGE
// ============================================================================

/// Mean of a possibly empty set of values. Never NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Average {
    Value(f64),
    /// No records contributed; shown as "no data" rather than a number.
    NoData,
}

impl Average {
    pub fn value(self) -> Option<f64> {
        match self {
            Average::Value(v) => Some(v),
            Average::NoData => None,
        }
    }

    /// Rounds the mean half away from zero to the given number of decimals.
    pub fn rounded(self, decimals: u32) -> Self {
        match self {
            Average::Value(v) => {
                let factor = 10f64.powi(decimals as i32);
                Average::Value((v * factor).round() / factor)
            }
            Average::NoData => Average::NoData,
        }
    }
}

// ============================================================================
// ACCUMULATOR
// ============================================================================

/// Accumulates count, sum and extremes of a stream of numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Accumulator {
    pub count: u64,
    pub sum: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Accumulator {
    pub fn new() -> Self {
        Accumulator::default()
    }

    pub fn add(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
    }

    pub fn mean(&self) -> Average {
        if self.count > 0 {
            Average::Value(self.sum / (self.count as f64))
        } else {
            Average::NoData
        }
    }
}

impl FromIterator<f64> for Accumulator {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = Accumulator::new();
        for value in iter {
            acc.add(value);
        }
        acc
    }
}
