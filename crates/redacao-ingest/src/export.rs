use std::fs;
use std::path::Path;

use csv::WriterBuilder;

use redacao_model::Table;

use crate::error::Result;

/// Serialize a table back to delimited text (UTF-8).
pub fn csv_bytes(table: &Table, delimiter: u8) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    {
        let mut writer = WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(&mut buffer);
        writer.write_record(&table.headers)?;
        for row in &table.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
    }
    Ok(buffer)
}

/// Write a table to `path` as delimited text.
pub fn write_csv_table(table: &Table, path: &Path, delimiter: u8) -> Result<()> {
    let bytes = csv_bytes(table, delimiter)?;
    fs::write(path, bytes)?;
    tracing::debug!(path = %path.display(), rows = table.row_count(), "wrote csv table");
    Ok(())
}
