//! Error types for wallet history operations.
//!
//! This module defines the custom error types used throughout the history
//! client and pagination state, providing structured error handling with
//! helpful messages.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Custom error type for wallet history operations.
///
/// This enum provides specific error variants for the failure modes
/// encountered when fetching and paginating a wallet's transaction history.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Network-related errors from HTTP requests (connection failures,
    /// timeouts, non-success status codes).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Payload or record parsing errors.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// Page id outside the valid range on explicit navigation.
    #[error("Page {requested} is out of range (valid pages: 1..={page_count})")]
    InvalidPage {
        /// The page id that was requested.
        requested: usize,
        /// The number of pages currently available.
        page_count: usize,
    },
}

impl HistoryError {
    /// Create a new parse error with the given message.
    ///
    /// # Arguments
    ///
    /// * `message` - Description of what failed to parse
    ///
    /// # Returns
    ///
    /// A new `HistoryError::Parse` variant.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new invalid page error.
    ///
    /// # Arguments
    ///
    /// * `requested` - The out-of-range page id
    /// * `page_count` - The number of pages currently available
    ///
    /// # Returns
    ///
    /// A new `HistoryError::InvalidPage` variant.
    #[must_use]
    pub const fn invalid_page(requested: usize, page_count: usize) -> Self {
        Self::InvalidPage {
            requested,
            page_count,
        }
    }

    /// Convert to a `color_eyre::Report` for API compatibility.
    ///
    /// This method allows `HistoryError` to be used with color_eyre's error
    /// handling infrastructure while preserving the error message.
    ///
    /// # Returns
    ///
    /// A `color_eyre::Report` containing the error message.
    #[must_use = "this converts the error into a Report for display"]
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

// ============================================================================
// Tests
// ============================================================================
