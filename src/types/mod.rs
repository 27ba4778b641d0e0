//! Types module
//!
//! Contains core data structures used throughout the library.
//! This module organizes types into logical submodules:
//! - `transaction`: The ledger transaction record and its export row
//! - `error`: Error types for the CSV serialization path

pub mod error;
pub mod transaction;

pub use error::ExportError;
pub use transaction::{export_date, ExportRow, TransactionRecord};
