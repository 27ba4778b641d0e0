//! Transaction-related types for the YNAB export library
//!
//! This module defines the ledger transaction record, the export row it
//! renders into, and the date normalization helper shared by both.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single ledger transaction
///
/// Value object holding everything needed to produce one export row.
/// All fields are set at construction and never mutated afterwards.
///
/// The signed `amount` is the canonical representation of money movement:
/// a negative amount is money leaving the account (outflow), a non-negative
/// amount is money entering it (inflow). Upstream sources that report
/// separate outflow/inflow columns can use
/// [`from_flows`](TransactionRecord::from_flows) instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Transaction timestamp
    ///
    /// Only the UTC calendar date survives export; the time of day is
    /// discarded by [`to_export_row`](TransactionRecord::to_export_row).
    pub date: DateTime<Utc>,

    /// Payee text, exported unchanged
    pub payee: String,

    /// Category text, exported unchanged
    pub category: String,

    /// Memo text, exported unchanged
    pub memo: String,

    /// Signed amount: negative = outflow, non-negative = inflow
    ///
    /// [`Decimal`] admits no NaN or infinity states, so every amount a
    /// caller can construct formats to a well-defined string.
    pub amount: Decimal,
}

/// One export row in the importer's column order
///
/// Serializes (via serde) under the exact column names YNAB-style importers
/// expect: Date, Payee, Category, Memo, Outflow, Inflow. Use
/// [`into_fields`](ExportRow::into_fields) when the plain ordered string
/// sequence is needed instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    /// UTC calendar date as `YYYY-MM-DD`
    #[serde(rename = "Date")]
    pub date: String,

    #[serde(rename = "Payee")]
    pub payee: String,

    #[serde(rename = "Category")]
    pub category: String,

    #[serde(rename = "Memo")]
    pub memo: String,

    /// Absolute amount with two decimal digits, or empty for inflows
    #[serde(rename = "Outflow")]
    pub outflow: String,

    /// Amount with two decimal digits, or empty for outflows
    #[serde(rename = "Inflow")]
    pub inflow: String,
}

impl TransactionRecord {
    /// Create a record from a signed amount
    ///
    /// No validation is performed on any field; construction always
    /// succeeds for well-typed input.
    pub fn new(
        date: DateTime<Utc>,
        payee: impl Into<String>,
        category: impl Into<String>,
        memo: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        TransactionRecord {
            date,
            payee: payee.into(),
            category: category.into(),
            memo: memo.into(),
            amount,
        }
    }

    /// Create a record from separate outflow/inflow magnitudes
    ///
    /// Computes the canonical signed amount as `inflow - outflow`. Callers
    /// are expected to pass at most one non-zero value; this is not
    /// validated, and passing both yields the net amount.
    pub fn from_flows(
        date: DateTime<Utc>,
        payee: impl Into<String>,
        category: impl Into<String>,
        memo: impl Into<String>,
        outflow: Decimal,
        inflow: Decimal,
    ) -> Self {
        Self::new(date, payee, category, memo, inflow - outflow)
    }

    /// Render this transaction as an export row
    ///
    /// Field by field:
    ///
    /// 1. Date: UTC calendar date of `date` as `YYYY-MM-DD`
    /// 2. Payee: unchanged
    /// 3. Category: unchanged
    /// 4. Memo: unchanged
    /// 5. Outflow: `|amount|` with two decimal digits when `amount < 0`,
    ///    empty otherwise
    /// 6. Inflow: `amount` with two decimal digits when `amount >= 0`,
    ///    empty otherwise
    ///
    /// Exactly one of outflow/inflow is non-empty for any amount; zero
    /// counts as an inflow of `"0.00"`. Deterministic: repeated calls on
    /// the same record yield identical rows.
    pub fn to_export_row(&self) -> ExportRow {
        let (outflow, inflow) = if self.amount < Decimal::ZERO {
            (format!("{:.2}", self.amount.abs()), String::new())
        } else {
            (String::new(), format!("{:.2}", self.amount))
        };

        ExportRow {
            date: export_date(&self.date),
            payee: self.payee.clone(),
            category: self.category.clone(),
            memo: self.memo.clone(),
            outflow,
            inflow,
        }
    }
}

impl ExportRow {
    /// The row as its ordered field sequence
    ///
    /// Order is fixed: date, payee, category, memo, outflow, inflow.
    pub fn into_fields(self) -> [String; 6] {
        [
            self.date,
            self.payee,
            self.category,
            self.memo,
            self.outflow,
            self.inflow,
        ]
    }
}

/// Format a date/time value as its UTC calendar date (`YYYY-MM-DD`)
///
/// Normalizes any timezone-aware value to UTC and discards the time of day.
/// Pure function, no side effects.
pub fn export_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    date.with_timezone(&Utc).format("%Y-%m-%d").to_string()
}
