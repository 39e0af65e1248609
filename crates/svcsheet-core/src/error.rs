//! Fatal, run-level errors raised by svcsheet-core.
//!
//! Per-cell problems never surface here: the normalizer degrades them to
//! defaults. Only header problems abort a conversion.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("missing column in sheet: '{0}'")]
    MissingColumn(String),
}
