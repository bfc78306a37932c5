//! HTTP clients for the wallet node API.
//!
//! This module provides the typed client for the node's transaction history
//! endpoint, built on a small reqwest wrapper that applies the shared
//! request timeout and headers.
//!
//! # Example
//!
//! ```ignore
//! use crate::client::HistoryClient;
//! use crate::domain::WalletId;
//!
//! let client = HistoryClient::new("http://localhost:8080");
//! let history = client.fetch_history(&WalletId::new("0xabc123")).await?;
//! ```

pub mod history;
pub mod http;

// ============================================================================
// Re-exports
// ============================================================================

pub use history::HistoryClient;
pub use http::{HttpClient, HttpConfig};
