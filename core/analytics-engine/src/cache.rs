//! FILENAME: core/analytics-engine/src/cache.rs
//! Report Cache - Memoizes dashboard reports by selection.
//!
//! Reports are a pure function of (dataset, selection) and the dataset is
//! immutable, so a cached report is always identical to a freshly built one.
//! The cache is only a shortcut for repeated render passes.

use std::sync::Arc;

use dataset::Dataset;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::report::{build_report, DashboardReport};
use crate::selection::FilterSelection;

/// Hit/miss counters for the cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Reports keyed by the selection they were built for, over one dataset.
#[derive(Debug)]
pub struct ReportCache<'a> {
    dataset: &'a Dataset,
    reports: FxHashMap<FilterSelection, Arc<DashboardReport>>,
    stats: CacheStats,
}

impl<'a> ReportCache<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        ReportCache {
            dataset,
            reports: FxHashMap::default(),
            stats: CacheStats::default(),
        }
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    /// Returns the report for a selection, building it on first request.
    pub fn get(&mut self, selection: &FilterSelection) -> Arc<DashboardReport> {
        if let Some(report) = self.reports.get(selection) {
            self.stats.hits += 1;
            log::debug!("Report cache hit ({} entries)", self.reports.len());
            return Arc::clone(report);
        }

        self.stats.misses += 1;
        let report = Arc::new(build_report(self.dataset, selection));
        self.reports.insert(selection.clone(), Arc::clone(&report));
        self.stats.entries = self.reports.len();
        log::debug!("Report cache miss, now {} entries", self.stats.entries);
        report
    }

    pub fn clear(&mut self) {
        self.reports.clear();
        self.stats.entries = 0;
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
