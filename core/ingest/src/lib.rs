//! FILENAME: core/ingest/src/lib.rs
//! Vendra Ingest Module
//!
//! Handles loading retail transaction exports from CSV into an immutable
//! `Dataset`. Malformed rows never reach the report engine: they are
//! dropped here, with counts surfaced through the `log` facade.

mod csv_reader;
mod error;

pub use csv_reader::{load_csv, read_csv};
pub use error::IngestError;
