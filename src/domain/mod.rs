//! Domain types for the wallet history engine.
//!
//! This module contains the core types used throughout the crate:
//! transaction records, the wallet identity, and the error taxonomy.
//!
//! # Module Organization
//!
//! - [`error`] - Custom error types for history operations
//! - [`transaction`] - Transaction records, parsing, and ordering
//! - [`wallet`] - Wallet identity supplied by the session layer

// ============================================================================
// Module Declarations
// ============================================================================

pub mod error;
pub mod transaction;
pub mod wallet;

// ============================================================================
// Re-exports
// ============================================================================

// Error types
pub use error::HistoryError;

// Transaction types
pub use transaction::{PENDING_BLOCK, Transaction, parse_timestamp, sort_newest_first};

// Wallet types
pub use wallet::WalletId;
