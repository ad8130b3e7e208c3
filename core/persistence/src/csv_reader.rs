// FILENAME: core\persistence\src\csv_reader.rs

use crate::DataLoadError;
use chrono::{NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord, Trim};
use dataset::{Dataset, DatasetBuilder, Record};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Columns every source file must carry. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "age",
    "age_group",
    "gender",
    "systolic",
    "cholesterol",
    "bp_level",
    "cholesterol_level",
    "condition",
    "visit_date",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

pub fn load_csv(path: &Path) -> Result<Dataset, DataLoadError> {
    let file = File::open(path)?;
    let dataset = load_csv_from_reader(file)?;
    log::info!("Loaded {} records from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Reads a whole table into a dataset. Any bad row fails the entire load.
pub fn load_csv_from_reader<R: Read>(reader: R) -> Result<Dataset, DataLoadError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let columns = ColumnMap::from_headers(csv_reader.headers()?)?;

    let mut builder = DatasetBuilder::new();
    for (idx, row) in csv_reader.records().enumerate() {
        let row = row?;
        // 1-based data row number, header excluded
        builder.push(columns.parse_record(&row, idx + 1)?);
    }

    log::debug!("Parsed {} data rows", builder.len());
    Ok(builder.build())
}

// ============================================================================
// COLUMN MAPPING
// ============================================================================

/// Position of each required column in the source header row.
struct ColumnMap {
    positions: [usize; 9],
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self, DataLoadError> {
        let mut positions = [0usize; 9];
        for (slot, name) in REQUIRED_COLUMNS.iter().enumerate() {
            positions[slot] = headers
                .iter()
                .position(|h| h.trim() == *name)
                .ok_or_else(|| DataLoadError::MissingColumn(name.to_string()))?;
        }
        Ok(ColumnMap { positions })
    }

    fn field<'r>(&self, row: &'r StringRecord, slot: usize, row_num: usize) -> Result<&'r str, DataLoadError> {
        match row.get(self.positions[slot]) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(DataLoadError::MissingValue {
                row: row_num,
                column: REQUIRED_COLUMNS[slot].to_string(),
            }),
        }
    }

    fn integer(&self, row: &StringRecord, slot: usize, row_num: usize) -> Result<i64, DataLoadError> {
        let raw = self.field(row, slot, row_num)?;
        parse_integer(raw).ok_or_else(|| DataLoadError::InvalidNumber {
            row: row_num,
            column: REQUIRED_COLUMNS[slot].to_string(),
            value: raw.to_string(),
        })
    }

    fn text(&self, row: &StringRecord, slot: usize, row_num: usize) -> Result<String, DataLoadError> {
        self.field(row, slot, row_num).map(str::to_string)
    }

    fn parse_record(&self, row: &StringRecord, row_num: usize) -> Result<Record, DataLoadError> {
        let raw_date = self.field(row, 8, row_num)?;
        let visit_date = parse_date(raw_date).ok_or_else(|| DataLoadError::InvalidDate {
            row: row_num,
            value: raw_date.to_string(),
        })?;

        Ok(Record {
            age: self.integer(row, 0, row_num)?,
            age_group: self.text(row, 1, row_num)?,
            gender: self.text(row, 2, row_num)?,
            systolic: self.integer(row, 3, row_num)?,
            cholesterol: self.integer(row, 4, row_num)?,
            bp_level: self.text(row, 5, row_num)?,
            cholesterol_level: self.text(row, 6, row_num)?,
            condition: self.text(row, 7, row_num)?,
            visit_date,
        })
    }
}

// ============================================================================
// VALUE PARSING
// ============================================================================

/// Accepts plain integers and whole-valued floats such as "45.0".
/// Floats outside the i64 range are rejected rather than saturated.
fn parse_integer(raw: &str) -> Option<i64> {
    if let Ok(n) = raw.parse::<i64>() {
        return Some(n);
    }
    match raw.parse::<f64>() {
        Ok(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => Some(f as i64),
        _ => None,
    }
}

/// Parses a calendar date. Timestamps are accepted and truncated to their date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(datetime.date());
        }
    }
    None
}
