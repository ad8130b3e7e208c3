// FILENAME: core\persistence\src\csv_writer.rs

use crate::ExportError;
use csv::WriterBuilder;
use serde::Serialize;
use std::io::Write;

/// Writes rows as CSV with a header derived from the row type's field names.
/// Used to export the filtered table shown in the dataset preview.
pub fn write_csv<'a, T, I, W>(rows: I, writer: W) -> Result<usize, ExportError>
where
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
    W: Write,
{
    let mut csv_writer = WriterBuilder::new().has_headers(true).from_writer(writer);

    let mut written = 0;
    for row in rows {
        csv_writer.serialize(row)?;
        written += 1;
    }
    csv_writer.flush()?;

    log::debug!("Exported {} rows as CSV", written);
    Ok(written)
}
