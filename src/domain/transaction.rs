//! Transaction types for the wallet history view.
//!
//! This module defines the `Transaction` record returned by the node's
//! history endpoint, JSON validation via [`Transaction::from_json`], and the
//! newest-first ordering applied to every fetched list.

use std::cmp::Reverse;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;

use super::error::HistoryError;

// ============================================================================
// Constants
// ============================================================================

/// Block height reported for a transaction that is not yet confirmed.
pub const PENDING_BLOCK: i64 = -1;

// ============================================================================
// Helper Functions
// ============================================================================

/// Parse an ISO-8601 timestamp string into a UTC instant.
///
/// Accepts RFC 3339 (`2024-03-01T09:30:00Z`, with or without an offset) and
/// the naive `T`- or space-separated variants the node emits for mempool
/// records; naive values are taken as UTC.
///
/// # Arguments
///
/// * `value` - The timestamp text to parse
///
/// # Returns
///
/// The parsed instant, or `None` if the text is not a recognizable timestamp.
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

/// Sort a transaction list newest-first.
///
/// The sort is stable: transactions with equal timestamps keep the order in
/// which the node returned them. Sorting an already-sorted list is a no-op.
///
/// # Arguments
///
/// * `transactions` - The list to sort in place
pub fn sort_newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by_cached_key(|txn| Reverse(txn.timestamp()));
}

/// Extract a required string field from a JSON record.
fn required_str(record: &Value, field: &'static str) -> Result<String, HistoryError> {
    record
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| HistoryError::parse(format!("transaction record is missing '{field}'")))
}

// ============================================================================
// Transaction
// ============================================================================

/// A single wallet transaction as reported by the node's history endpoint.
///
/// Records are immutable once fetched; a refresh replaces the whole list
/// rather than mutating entries in place. The only copy made afterwards is
/// the value stored by the selection when a row is opened in the detail
/// overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Transaction hash (no `0x` prefix).
    pub hash: String,
    /// Sender address (no `0x` prefix).
    pub from: String,
    /// Receiver address (no `0x` prefix).
    pub to: String,
    /// Transferred amount in whole currency units.
    pub amount: f64,
    /// Raw ISO-8601 timestamp text as returned by the node. Shown verbatim
    /// in the detail overlay; [`Transaction::timestamp`] provides the parsed
    /// instant.
    pub time_stamp: String,
    /// Block height, or [`PENDING_BLOCK`] while unconfirmed.
    pub block: i64,
}

impl Transaction {
    /// Build a `Transaction` from a JSON record.
    ///
    /// Validates that `hash`, `from`, `to`, `amount`, and `timeStamp` are
    /// present and that the timestamp parses. A missing `block` field is
    /// treated as [`PENDING_BLOCK`]; the node omits it only for mempool
    /// records.
    ///
    /// # Arguments
    ///
    /// * `record` - The JSON representation of one transaction
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Parse` if a required field is missing, has the
    /// wrong type, or the timestamp is unparseable.
    pub fn from_json(record: &Value) -> Result<Self, HistoryError> {
        let hash = required_str(record, "hash")?;
        let from = required_str(record, "from")?;
        let to = required_str(record, "to")?;
        let amount = record
            .get("amount")
            .and_then(Value::as_f64)
            .ok_or_else(|| HistoryError::parse("transaction record is missing 'amount'"))?;
        let time_stamp = required_str(record, "timeStamp")?;
        if parse_timestamp(&time_stamp).is_none() {
            return Err(HistoryError::parse(format!(
                "unparseable timestamp '{time_stamp}'"
            )));
        }
        let block = record
            .get("block")
            .and_then(Value::as_i64)
            .unwrap_or(PENDING_BLOCK);

        Ok(Self {
            hash,
            from,
            to,
            amount,
            time_stamp,
            block,
        })
    }

    /// Returns the parsed timestamp used for ordering.
    ///
    /// [`Transaction::from_json`] guarantees the stored text parses; the
    /// epoch fallback only guards values constructed by hand.
    ///
    /// # Returns
    ///
    /// The transaction's instant in UTC.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        parse_timestamp(&self.time_stamp).unwrap_or(DateTime::UNIX_EPOCH)
    }

    /// Returns `true` while the transaction has no confirmed block.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.block == PENDING_BLOCK
    }
}

// ============================================================================
// Tests
// ============================================================================
