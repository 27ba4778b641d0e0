//! YNAB Export Library
//! # Overview
//!
//! This library renders ledger transactions into the six-field row format
//! used by YNAB-style personal-finance importers.
//!
//! # Architecture
//!
//! The library is organized into two components:
//!
//! - [`types`] - Core data types ([`TransactionRecord`], [`ExportRow`], errors)
//! - [`io`] - CSV serialization of export rows
//!
//! # Export Format
//!
//! Each transaction produces one row with the fixed column order
//! Date, Payee, Category, Memo, Outflow, Inflow:
//!
//! - **Date**: UTC calendar date as `YYYY-MM-DD`, time of day discarded
//! - **Payee**, **Category**, **Memo**: free text carried through unchanged
//! - **Outflow**: absolute amount with two decimal digits when money leaves
//!   the account, empty otherwise
//! - **Inflow**: amount with two decimal digits when money enters the
//!   account (an amount of exactly zero counts as an inflow of `0.00`),
//!   empty otherwise
//!
//! Amounts are [`rust_decimal::Decimal`] values whose sign selects the
//! column; dates are [`chrono`] values normalized to UTC.

// Module declarations
pub mod io;
pub mod types;

pub use io::{write_transactions_csv, EXPORT_HEADER};
pub use types::{export_date, ExportError, ExportRow, TransactionRecord};
