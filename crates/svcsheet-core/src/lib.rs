//! svcsheet-core: service listing model and row normalizer.
//!
//! This crate turns loosely typed spreadsheet rows into canonical
//! [`ServiceRecord`] values. It knows nothing about files: sources hand it a
//! [`Table`], the caller hands the records to a sink.
//!
//! # Pipeline
//!
//! ```text
//! Table ──► RawRow ──► normalize_row ──► ServiceRecord
//!             │
//!             └── columns (alias table)
//! ```

pub mod columns;
pub mod config;
pub mod error;
pub mod normalizer;
pub mod types;

pub use columns::Field;
pub use config::Config;
pub use error::SchemaError;
pub use normalizer::{normalize_row, NormalizeOptions, SalePriceFallback};
pub use types::{Action, ActionFields, ActionModel, Cell, Money, RawRow, ServiceRecord, Table};
