//! svcsheet: services spreadsheet to JSON.
//!
//! Reads a sheet of service listings, normalises every row into a
//! [`ServiceRecord`](svcsheet_core::ServiceRecord), and writes the ordered
//! records as one pretty-printed JSON array.
//!
//! # Architecture
//!
//! ```text
//! Source ──► Normalizer ──► Sink
//! (sources)    (core)      (sink)
//! ```
//!
//! The run is all-or-nothing at the file level: a missing input or a missing
//! required column aborts before anything is written. Individual cells are
//! best-effort and never abort a run.

pub mod convert;
pub mod sink;

pub use convert::{convert, normalize_table, ConvertError, ConvertRequest, ConvertSummary};
