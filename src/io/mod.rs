//! I/O module
//!
//! Handles CSV output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (header line, row serialization)

pub mod csv_format;

pub use csv_format::{write_transactions_csv, EXPORT_HEADER};
