//! FILENAME: core/analytics-engine/src/lib.rs
//! Filter-and-aggregate pipeline for the patient health dashboard.
//!
//! This crate turns an immutable `Dataset` plus a user selection into the
//! tables behind every dashboard metric and chart. It depends on `dataset`
//! only for shared types (Record, Facet, Dataset).
//!
//! Layers:
//! - `selection`: Serializable snapshot of the user's filter choices
//! - `filter`: Narrows the dataset to a `FilteredView`
//! - `accumulator` / `boxplot`: Numeric reducers
//! - `aggregation`: The named aggregation functions
//! - `pipeline`: Catalogue of aggregations runnable by name
//! - `report`: Everything one render pass needs, in one value
//! - `cache`: Reports memoized by selection

pub mod accumulator;
pub mod aggregation;
pub mod boxplot;
pub mod cache;
pub mod filter;
pub mod pipeline;
pub mod report;
pub mod selection;

pub use accumulator::{Accumulator, Average};
pub use aggregation::*;
pub use boxplot::{quantile_sorted, BoxStats, IQR_FENCE_FACTOR};
pub use cache::{CacheStats, ReportCache};
pub use filter::{apply, FilteredView};
pub use pipeline::{run_pipeline, AggregateResult, Aggregation, NamedResult};
pub use report::*;
pub use selection::FilterSelection;
