//! CSV writer for tables.

use std::path::Path;

use crate::data::Table;
use crate::error::{Result, ScrubError};

/// Writes tables as delimited text: a header row, then one row per record.
pub struct Writer {
    delimiter: u8,
}

impl Writer {
    /// Create a comma-separated writer.
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Create a writer with a custom delimiter.
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Write a table to a path, creating missing parent directories.
    pub fn write_file(&self, table: &Table, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ScrubError::io(parent, e))?;
        }

        let bytes = self.to_bytes(table)?;
        std::fs::write(path, bytes).map_err(|e| ScrubError::io(path, e))
    }

    /// Serialize a table to bytes.
    pub fn to_bytes(&self, table: &Table) -> Result<Vec<u8>> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(Vec::new());

        writer.write_record(table.headers())?;

        let date_only: Vec<bool> = table.columns().iter().map(|c| c.is_date_only()).collect();

        for row in 0..table.row_count() {
            let record = table
                .columns()
                .iter()
                .zip(&date_only)
                .map(|(column, &date_only)| column.render(row, date_only));
            writer.write_record(record)?;
        }

        writer
            .into_inner()
            .map_err(|e| ScrubError::io("<buffer>", e.into_error()))
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}
