//! FILENAME: core/analytics-engine/src/filter.rs
//! Filter Engine - Narrows the dataset to the records passing a selection.
//!
//! The view borrows the dataset and stores only the indices of the passing
//! records, in dataset order. It is recomputed on every selection change and
//! never mutated afterwards.

use dataset::{Dataset, Record};

use crate::selection::FilterSelection;

/// The subsequence of dataset records that satisfy a selection.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    dataset: &'a Dataset,
    indices: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    /// A view over every record of the dataset.
    pub fn all(dataset: &'a Dataset) -> Self {
        FilteredView {
            dataset,
            indices: (0..dataset.len()).collect(),
        }
    }

    /// The unfiltered dataset this view was taken from.
    /// Group-by aggregations read their category domains from here.
    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    /// Positions of the passing records within the dataset.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&'a Record> {
        let dataset = self.dataset;
        self.indices.get(position).and_then(|&i| dataset.record(i))
    }

    /// Iterates the passing records in dataset order.
    pub fn records(&self) -> impl Iterator<Item = &'a Record> + '_ {
        let records = self.dataset.records();
        self.indices.iter().map(move |&i| &records[i])
    }
}

impl PartialEq for FilteredView<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.dataset, other.dataset) && self.indices == other.indices
    }
}

impl Eq for FilteredView<'_> {}

/// Applies a selection in a single pass over the dataset.
pub fn apply<'a>(dataset: &'a Dataset, selection: &FilterSelection) -> FilteredView<'a> {
    if selection.is_unconstrained() {
        return FilteredView::all(dataset);
    }

    let indices: Vec<usize> = dataset
        .records()
        .iter()
        .enumerate()
        .filter_map(|(i, record)| if selection.matches(record) { Some(i) } else { None })
        .collect();

    log::debug!(
        "Filter kept {} of {} records ({} constrained facets)",
        indices.len(),
        dataset.len(),
        selection.facets().count()
    );

    FilteredView { dataset, indices }
}
