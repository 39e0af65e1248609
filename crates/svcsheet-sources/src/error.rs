use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("input file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("unsupported input format: {} (expected .xlsx, .xlsm, .xlsb, .xls, .ods or .csv)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("workbook has no worksheets")]
    NoSheets,

    #[error("worksheet '{0}' not found")]
    SheetNotFound(String),

    #[error("failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
}
