//! CSV source: a sheet exported as comma-separated text.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use svcsheet_core::{Cell, Table};

use crate::{into_table, SourceError, TabularSource};

#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TabularSource for CsvSource {
    fn read_table(&self) -> Result<Table, SourceError> {
        // Header handling happens in `into_table`, so every record is data here.
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;

        let mut rows: Vec<Vec<Cell>> = Vec::new();
        // Byte records: a non-UTF-8 cell (cp1252 exports) degrades, never fails the sheet.
        for (idx, record) in reader.byte_records().enumerate() {
            let record = record?;
            rows.push(record.iter().map(|field| to_cell(idx, field)).collect());
        }
        tracing::debug!(path = %self.path.display(), rows = rows.len(), "read CSV");

        Ok(into_table(rows))
    }
}

fn to_cell(record: usize, field: &[u8]) -> Cell {
    if field.is_empty() {
        return Cell::Empty;
    }
    match String::from_utf8_lossy(field) {
        Cow::Borrowed(text) => Cell::Text(text.to_string()),
        Cow::Owned(text) => {
            tracing::debug!(record, "cell is not valid UTF-8; replacing bad bytes");
            Cell::Text(text)
        }
    }
}
