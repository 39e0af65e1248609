//! svcsheet-sources: tabular data sources for svcsheet.
//!
//! Each source reads a whole sheet into a [`svcsheet_core::Table`]: the first
//! non-empty row becomes the header, everything below it is data.

pub mod delimited;
pub mod error;
pub mod workbook;

use std::path::Path;

use svcsheet_core::Table;

pub use delimited::CsvSource;
pub use error::SourceError;
pub use workbook::WorkbookSource;

/// Something that can produce a [`Table`].
pub trait TabularSource {
    fn read_table(&self) -> Result<Table, SourceError>;
}

/// Spreadsheet extensions handled by [`WorkbookSource`].
const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Pick a source for `path` by file extension.
///
/// A missing file is reported here, before any parsing is attempted.
pub fn open_source(path: &Path, sheet: Option<&str>) -> Result<Box<dyn TabularSource>, SourceError> {
    if !path.is_file() {
        return Err(SourceError::NotFound(path.to_path_buf()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "csv" => {
            if let Some(sheet) = sheet {
                tracing::debug!(sheet, "sheet name ignored for CSV input");
            }
            Ok(Box::new(CsvSource::new(path)))
        }
        e if WORKBOOK_EXTENSIONS.contains(&e) => {
            Ok(Box::new(WorkbookSource::new(path, sheet.map(str::to_string))))
        }
        _ => Err(SourceError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Split rows into a header row and data rows.
///
/// Leading rows with no content are skipped so a sheet that starts with a
/// blank line still finds its header.
pub(crate) fn into_table(rows: Vec<Vec<svcsheet_core::Cell>>) -> Table {
    let mut rows = rows
        .into_iter()
        .skip_while(|row| row.iter().all(svcsheet_core::Cell::is_empty));

    let headers = rows
        .next()
        .map(|header| {
            header
                .iter()
                .map(|cell| cell.as_text().map(|s| s.into_owned()).unwrap_or_default())
                .collect()
        })
        .unwrap_or_default();

    Table::new(headers, rows.collect())
}
