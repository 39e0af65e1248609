//! Conversion pipeline: source → normalizer → sink.

use std::collections::HashSet;
use std::path::PathBuf;

use svcsheet_core::columns::{check_header, missing_optional};
use svcsheet_core::{normalize_row, Config, NormalizeOptions, SchemaError, ServiceRecord, Table};
use svcsheet_sources::{open_source, SourceError};
use thiserror::Error;

use crate::sink;

/// Fatal errors. Any of these aborts the run before output is written.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("failed to encode services as JSON: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Everything one conversion run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Worksheet name; `None` reads the first sheet.
    pub sheet: Option<String>,
    pub options: NormalizeOptions,
}

impl ConvertRequest {
    pub fn from_config(config: &Config) -> Self {
        Self {
            input: config.input.path.clone(),
            output: config.output.path.clone(),
            sheet: config.input.sheet_name().map(str::to_string),
            options: config.normalize,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub output: PathBuf,
    /// Records written.
    pub written: usize,
    /// Data rows that produced no record.
    pub skipped: usize,
    /// Slugs seen more than once, in first-repeat order. Duplicates are
    /// still written; deduplication is left to consumers.
    pub duplicate_slugs: Vec<String>,
}

/// Run one conversion end to end.
pub fn convert(request: &ConvertRequest) -> Result<ConvertSummary, ConvertError> {
    let source = open_source(&request.input, request.sheet.as_deref())?;
    let table = source.read_table()?;
    tracing::info!(
        input = %request.input.display(),
        rows = table.rows.len(),
        action_model = %request.options.action_model,
        "loaded sheet"
    );

    let records = normalize_table(&table, &request.options)?;
    let skipped = table.rows.len() - records.len();
    let duplicates = duplicate_slugs(&records);
    for slug in &duplicates {
        tracing::warn!(slug = %slug, "slug appears more than once; keeping every row");
    }

    sink::write_json(&request.output, &records)?;
    tracing::info!(
        output = %request.output.display(),
        written = records.len(),
        skipped,
        "conversion finished"
    );

    Ok(ConvertSummary {
        output: request.output.clone(),
        written: records.len(),
        skipped,
        duplicate_slugs: duplicates,
    })
}

/// Validate the header, then normalise every data row in sheet order.
pub fn normalize_table(
    table: &Table,
    options: &NormalizeOptions,
) -> Result<Vec<ServiceRecord>, SchemaError> {
    let columns = table.columns();
    check_header(&columns)?;
    for field in missing_optional(&columns, options.action_model) {
        tracing::debug!(column = %field, "optional column absent; using defaults");
    }

    let mut records = Vec::with_capacity(table.rows.len());
    for (idx, row) in table.raw_rows().enumerate() {
        match normalize_row(&row, options) {
            Some(record) => records.push(record),
            None => tracing::debug!(row = idx + 1, "skipping row without a usable slug"),
        }
    }
    Ok(records)
}

fn duplicate_slugs(records: &[ServiceRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();
    for record in records {
        let slug = record.slug.as_str();
        if !seen.insert(slug) && reported.insert(slug) {
            duplicates.push(slug.to_string());
        }
    }
    duplicates
}
