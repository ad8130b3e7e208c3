//! FILENAME: core/persistence/src/lib.rs
//! Dashboard Persistence Module
//!
//! Loads the patient visit dataset from CSV (all-or-nothing) and exports
//! filtered tables back to CSV. Load and export failures are separate error types.

mod csv_reader;
mod csv_writer;
mod error;

pub use csv_reader::{load_csv, load_csv_from_reader, parse_date, REQUIRED_COLUMNS};
pub use csv_writer::write_csv;
pub use error::{DataLoadError, ExportError};
