use crate::error::Result;
use crate::results::Tabular;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write a header row followed by one row per record
pub fn write_records<T: Tabular, W: Write>(writer: W, records: &[T]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(T::header())?;
    for record in records {
        csv_writer.write_record(record.row())?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write the records to it
pub fn write_records_to_path<T: Tabular>(path: impl AsRef<Path>, records: &[T]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_records(file, records)?;

    ::log::info!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}
