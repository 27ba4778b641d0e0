//! CSV format handling for export rows
//!
//! This module centralizes the downstream CSV format concerns:
//! - The header line expected by YNAB-style importers
//! - Serialization of transaction records into delimited rows
//!
//! All functions are pure over the supplied writer (no file handling) for
//! easy testing.

use crate::types::{ExportError, TransactionRecord};
use csv::WriterBuilder;
use std::io::Write;

/// Column headers of the export format, in row order
pub const EXPORT_HEADER: [&str; 6] = ["Date", "Payee", "Category", "Memo", "Outflow", "Inflow"];

/// Write transaction records to CSV format
///
/// Writes the header line followed by one export row per record, in input
/// order. Fields containing delimiters, quotes, or line breaks are quoted
/// by the CSV layer; everything else passes through verbatim.
///
/// # Arguments
///
/// * `transactions` - Slice of transaction records to serialize
/// * `output` - Mutable reference to a writer receiving the CSV text
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(ExportError)` if the CSV serializer or the writer failed
pub fn write_transactions_csv(
    transactions: &[TransactionRecord],
    output: &mut dyn Write,
) -> Result<(), ExportError> {
    // Header is written explicitly so empty input still yields it
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(output);
    writer.write_record(EXPORT_HEADER)?;

    for transaction in transactions {
        writer.serialize(transaction.to_export_row())?;
    }

    writer.flush()?;

    Ok(())
}
