//! FILENAME: core/dataset/src/dataset.rs
//! PURPOSE: The canonical, immutable patient visit dataset.
//! CONTEXT: Built once (usually by the persistence crate) and then only
//! borrowed. Facet domains are captured while records are pushed so they
//! always equal the distinct values actually present.

use crate::domain::FacetDomain;
use crate::facet::Facet;
use crate::record::Record;

// ============================================================================
// DATASET
// ============================================================================

/// Ordered, immutable sequence of records plus the distinct values of every facet.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
    /// One domain per facet, indexed by `Facet::slot`.
    domains: [FacetDomain; 5],
}

impl Dataset {
    /// Builds a dataset from already-typed records.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        let records = records.into_iter();
        let mut builder = DatasetBuilder::new();
        builder.reserve(records.size_hint().0);
        for record in records {
            builder.push(record);
        }
        builder.build()
    }

    pub fn empty() -> Self {
        DatasetBuilder::new().build()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn record(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn domain(&self, facet: Facet) -> &FacetDomain {
        &self.domains[facet.slot()]
    }

    /// All values observed for a facet, in first-seen order.
    /// Used to populate the selectable options of a filter.
    pub fn distinct_values(&self, facet: Facet) -> &[String] {
        self.domain(facet).values()
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::empty()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Accumulates records and their facet domains before freezing them into a `Dataset`.
#[derive(Debug)]
pub struct DatasetBuilder {
    records: Vec<Record>,
    domains: [FacetDomain; 5],
}

impl DatasetBuilder {
    pub fn new() -> Self {
        DatasetBuilder {
            records: Vec::new(),
            domains: Facet::ALL.map(FacetDomain::new),
        }
    }

    /// Reserves capacity for expected record count.
    pub fn reserve(&mut self, record_count: usize) {
        self.records.reserve(record_count);
    }

    pub fn push(&mut self, record: Record) {
        for facet in Facet::ALL {
            self.domains[facet.slot()].intern(facet.value_of(&record));
        }
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn build(self) -> Dataset {
        Dataset {
            records: self.records,
            domains: self.domains,
        }
    }
}

impl Default for DatasetBuilder {
    fn default() -> Self {
        Self::new()
    }
}
