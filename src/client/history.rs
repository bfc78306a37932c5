//! Client for the node's wallet transaction history endpoint.

use serde_json::Value;
use tracing::debug;

use super::http::{HttpClient, HttpConfig};
use crate::config::AppConfig;
use crate::domain::{HistoryError, Transaction, WalletId, sort_newest_first};

// ============================================================================
// History Client
// ============================================================================

/// Typed client for `GET {base_url}/transactions/{wallet}`.
///
/// The client is cheap to clone (the underlying connection pool is shared)
/// and holds no mutable state; every call returns a freshly fetched,
/// newest-first list. Calling twice against an unchanged backend yields
/// equal lists.
#[derive(Debug, Clone)]
pub struct HistoryClient {
    http: HttpClient,
    base_url: String,
}

impl HistoryClient {
    /// Create a new history client for the given base URL.
    ///
    /// A trailing slash on the base URL is tolerated.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from the application configuration.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.base_url())
    }

    /// Create a client with a custom HTTP configuration (e.g. timeout).
    #[must_use]
    pub fn with_http_config(base_url: impl Into<String>, http_config: HttpConfig) -> Self {
        Self {
            http: HttpClient::with_config(http_config),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the history endpoint URL for a wallet.
    #[must_use]
    pub fn history_url(&self, wallet: &WalletId) -> String {
        format!("{}/transactions/{}", self.base_url, wallet.path_segment())
    }

    /// Fetch the wallet's full transaction history, sorted newest-first.
    ///
    /// Ties on the timestamp keep the order in which the node returned the
    /// records. The call has no side effects beyond the network request; the
    /// returned list is owned by the caller.
    ///
    /// # Arguments
    ///
    /// * `wallet` - The wallet whose history to fetch
    ///
    /// # Errors
    ///
    /// * `HistoryError::Network` - request failed, timed out, or the node
    ///   answered with a non-success status
    /// * `HistoryError::Parse` - the payload is not a JSON array, or a record
    ///   is missing required fields / has an unparseable timestamp
    pub async fn fetch_history(&self, wallet: &WalletId) -> Result<Vec<Transaction>, HistoryError> {
        let url = self.history_url(wallet);
        debug!(%url, "fetching transaction history");

        let response = self.http.get(&url).send().await?.error_for_status()?;

        let payload: Value = response
            .json()
            .await
            .map_err(|_| HistoryError::parse("response body is not valid JSON"))?;
        let records = payload
            .as_array()
            .ok_or_else(|| HistoryError::parse("expected a JSON array of transactions"))?;

        let mut transactions = records
            .iter()
            .map(Transaction::from_json)
            .collect::<Result<Vec<_>, _>>()?;
        sort_newest_first(&mut transactions);

        debug!(count = transactions.len(), "transaction history fetched");
        Ok(transactions)
    }
}

// ============================================================================
// Tests
// ============================================================================
