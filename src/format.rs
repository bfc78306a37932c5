//! Display helpers for transaction rows and the detail overlay.
//!
//! Pure functions only; the render layer decides where the strings go.

use crate::constants::{
    ADDRESS_HEAD_LEN, ADDRESS_SHORTEN_THRESHOLD, CONFIRMED_TIME_FORMAT, CURRENCY_TICKER,
    HASH_HEAD_LEN,
};
use crate::domain::{Transaction, WalletId};

// ============================================================================
// Shortening Helpers
// ============================================================================

/// Shorten an address for table display.
///
/// Addresses shorter than 20 characters are returned unchanged; longer ones
/// become `0x` + the first five characters + `...` + the last `tail_len`
/// characters. The `0x` marker is always prepended, even when the input
/// already starts with one — bare addresses from transaction records gain
/// their marker here, and pre-prefixed input keeps its own.
///
/// # Arguments
///
/// * `addr` - The address to shorten
/// * `tail_len` - Number of trailing characters to keep
#[must_use]
pub fn shorten_address(addr: &str, tail_len: usize) -> String {
    let len = addr.chars().count();
    if len < ADDRESS_SHORTEN_THRESHOLD {
        return addr.to_string();
    }

    let head: String = addr.chars().take(ADDRESS_HEAD_LEN).collect();
    let tail: String = addr.chars().skip(len.saturating_sub(tail_len)).collect();
    format!("0x{head}...{tail}")
}

/// Shorten a transaction hash for table display.
///
/// Always `0x` + the first ten characters + `...`; unlike
/// [`shorten_address`] there is no length guard, so short hashes are
/// shortened (marked and truncated) too.
#[must_use]
pub fn shorten_hash(hash: &str) -> String {
    let head: String = hash.chars().take(HASH_HEAD_LEN).collect();
    format!("0x{head}...")
}

// ============================================================================
// Cell Labels
// ============================================================================

/// Status cell text: `Pending` until the transaction has a confirmed block.
#[must_use]
pub const fn status_label(txn: &Transaction) -> &'static str {
    if txn.is_pending() { "Pending" } else { "Success" }
}

/// Date cell text: the confirmed timestamp, or a waiting marker for
/// transactions still in the mempool.
#[must_use]
pub fn time_label(txn: &Transaction) -> String {
    if txn.is_pending() {
        "Waiting...".to_string()
    } else {
        txn.timestamp().format(CONFIRMED_TIME_FORMAT).to_string()
    }
}

/// Amount cell text, signed from the wallet's point of view.
///
/// Outgoing transfers (the wallet is the sender) show `-`, everything else
/// shows `+`, followed by the amount and the currency ticker.
#[must_use]
pub fn amount_label(txn: &Transaction, wallet: &WalletId) -> String {
    let sign = if wallet.is_sender(&txn.from) {
        "- "
    } else {
        "+ "
    };
    format!("{sign}{} {CURRENCY_TICKER}", txn.amount)
}

// ============================================================================
// Detail Overlay
// ============================================================================

/// The labeled field list shown by the transaction detail overlay.
///
/// Values are unshortened; the overlay is where the full hash and addresses
/// are readable. The timestamp is the raw text as returned by the node.
#[must_use]
pub fn detail_fields(txn: &Transaction) -> Vec<(&'static str, String)> {
    vec![
        ("Hash Tx", txn.hash.clone()),
        ("Time", txn.time_stamp.clone()),
        ("Block", txn.block.to_string()),
        ("From", txn.from.clone()),
        ("To", txn.to.clone()),
        ("Amount", txn.amount.to_string()),
    ]
}

// ============================================================================
// Tests
// ============================================================================
