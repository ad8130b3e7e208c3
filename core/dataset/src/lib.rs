//! FILENAME: core/dataset/src/lib.rs
//! PURPOSE: Main library entry point for the patient visit dataset.
//! CONTEXT: Shared types used by the persistence, analytics-engine and app
//! crates. The dataset is immutable once built and is passed by reference.

pub mod dataset;
pub mod domain;
pub mod facet;
pub mod record;

// Re-export commonly used types at the crate root
pub use dataset::{Dataset, DatasetBuilder};
pub use domain::{FacetDomain, ValueId};
pub use facet::{Facet, FacetParseError, Measure};
pub use record::{Record, BP_HIGH, CHOLESTEROL_BORDERLINE_HIGH};
