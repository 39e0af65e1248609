//! Workbook source for `.xlsx`, `.xls`, `.ods` and friends, read through `calamine`.

use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Reader};
use svcsheet_core::{Cell, Table};

use crate::{into_table, SourceError, TabularSource};

/// Reads one worksheet: the named one, or the first sheet in the workbook.
#[derive(Debug, Clone)]
pub struct WorkbookSource {
    path: PathBuf,
    sheet: Option<String>,
}

impl WorkbookSource {
    pub fn new(path: impl Into<PathBuf>, sheet: Option<String>) -> Self {
        Self {
            path: path.into(),
            sheet,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TabularSource for WorkbookSource {
    fn read_table(&self) -> Result<Table, SourceError> {
        let mut workbook = open_workbook_auto(&self.path)?;
        let names = workbook.sheet_names();

        let sheet_name = match &self.sheet {
            Some(wanted) => names
                .iter()
                .find(|name| name.eq_ignore_ascii_case(wanted))
                .cloned()
                .ok_or_else(|| SourceError::SheetNotFound(wanted.clone()))?,
            None => names.first().cloned().ok_or(SourceError::NoSheets)?,
        };

        let range = workbook.worksheet_range(&sheet_name)?;
        tracing::debug!(
            path = %self.path.display(),
            sheet = %sheet_name,
            rows = range.height(),
            columns = range.width(),
            "read worksheet"
        );

        let rows: Vec<Vec<Cell>> = range
            .rows()
            .map(|row| row.iter().map(to_cell).collect())
            .collect();
        Ok(into_table(rows))
    }
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        other => Cell::Text(other.to_string()),
    }
}
