//! FILENAME: core/analytics-engine/src/boxplot.rs
//! Boxplot Statistics - Five-number summary with 1.5×IQR outlier detection.
//!
//! Quartiles use linear interpolation between the closest ranks
//! (position `p * (n - 1)` in the sorted values). Whiskers reach the most
//! extreme data points still inside the fences; anything beyond a fence is
//! an outlier.

use serde::{Deserialize, Serialize};

use crate::accumulator::Accumulator;

/// Multiplier applied to the interquartile range to place the fences.
pub const IQR_FENCE_FACTOR: f64 = 1.5;

/// Summary of one group's values, ready to draw as a box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStats {
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub mean: f64,
    pub lower_fence: f64,
    pub upper_fence: f64,
    pub lower_whisker: f64,
    pub upper_whisker: f64,
    /// Values outside the fences, ascending.
    pub outliers: Vec<f64>,
}

impl BoxStats {
    /// Summarizes a set of values. Returns `None` when there are none.
    pub fn from_values(mut values: Vec<f64>) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        values.sort_by(f64::total_cmp);

        let acc: Accumulator = values.iter().copied().collect();
        let q1 = quantile_sorted(&values, 0.25)?;
        let median = quantile_sorted(&values, 0.5)?;
        let q3 = quantile_sorted(&values, 0.75)?;

        let iqr = q3 - q1;
        let lower_fence = q1 - IQR_FENCE_FACTOR * iqr;
        let upper_fence = q3 + IQR_FENCE_FACTOR * iqr;

        let lower_whisker = values.iter().copied().find(|v| *v >= lower_fence).unwrap_or(q1);
        let upper_whisker = values.iter().rev().copied().find(|v| *v <= upper_fence).unwrap_or(q3);

        let outliers = values
            .iter()
            .copied()
            .filter(|v| *v < lower_fence || *v > upper_fence)
            .collect();

        Some(BoxStats {
            count: values.len(),
            min: values[0],
            q1,
            median,
            q3,
            max: values[values.len() - 1],
            mean: acc.mean().value().unwrap_or(median),
            lower_fence,
            upper_fence,
            lower_whisker,
            upper_whisker,
            outliers,
        })
    }

    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Linear-interpolated quantile of already sorted values. `None` when empty.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    match sorted.len() {
        0 => None,
        1 => Some(sorted[0]),
        n => {
            let pos = p.clamp(0.0, 1.0) * (n - 1) as f64;
            let lo = pos.floor() as usize;
            let hi = pos.ceil() as usize;
            Some(sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64))
        }
    }
}
