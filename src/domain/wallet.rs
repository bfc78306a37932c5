//! Wallet identity as supplied by the session layer.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Wallet Id
// ============================================================================

/// A wallet's public key as handed over by the auth/session collaborator.
///
/// Keys carry a two-character `0x` marker; the node's history endpoint
/// expects the bare key, so [`WalletId::path_segment`] strips the marker for
/// URL use while the full key stays available for display and sender checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletId {
    public_key: String,
}

impl WalletId {
    /// Creates a wallet id from the session's public key string.
    #[must_use]
    pub fn new(public_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
        }
    }

    /// Returns the full public key, marker included.
    #[must_use]
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Returns the key with its two-character marker stripped, as expected
    /// by the history endpoint's path.
    #[must_use]
    pub fn path_segment(&self) -> &str {
        self.public_key.get(2..).unwrap_or("")
    }

    /// Returns `true` if the given bare sender address belongs to this
    /// wallet. Transaction records store addresses without the marker, so
    /// the comparison re-attaches it.
    ///
    /// # Arguments
    ///
    /// * `address` - A bare sender address from a transaction record
    #[must_use]
    pub fn is_sender(&self, address: &str) -> bool {
        self.public_key.len() == address.len() + 2
            && self.public_key.starts_with("0x")
            && self.public_key[2..] == *address
    }
}

impl fmt::Display for WalletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.public_key)
    }
}

// ============================================================================
// Tests
// ============================================================================
