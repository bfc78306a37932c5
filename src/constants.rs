//! Application constants for the wallet history engine.
//!
//! This module provides centralized constants for pagination, display
//! formatting, and configuration defaults. Grouping these constants improves
//! maintainability and ensures consistency across the codebase.

// ============================================================================
// Pagination Constants
// ============================================================================

/// Number of transactions shown per page in the history table.
pub const PAGE_SIZE: usize = 10;

// ============================================================================
// API Constants
// ============================================================================

/// Default host for the node's HTTP API.
pub const DEFAULT_API_HOST: &str = "localhost";

/// Default port for the node's HTTP API.
pub const DEFAULT_API_PORT: u16 = 8080;

/// Environment variable overriding the API host.
pub const ENV_API_HOST: &str = "WALLETHIST_API_HOST";

/// Environment variable overriding the API port.
pub const ENV_API_PORT: &str = "WALLETHIST_API_PORT";

/// Capacity of the history event channel between the refresh worker and the
/// owning loop.
pub const EVENT_CHANNEL_CAPACITY: usize = 100;

// ============================================================================
// Display Constants
// ============================================================================

/// Addresses shorter than this are displayed unshortened.
pub const ADDRESS_SHORTEN_THRESHOLD: usize = 20;

/// Leading characters kept when shortening an address.
pub const ADDRESS_HEAD_LEN: usize = 5;

/// Trailing characters kept when shortening an address.
pub const ADDRESS_TAIL_LEN: usize = 5;

/// Leading characters kept when shortening a transaction hash.
pub const HASH_HEAD_LEN: usize = 10;

/// Ticker suffix attached to displayed amounts.
pub const CURRENCY_TICKER: &str = "MC";

/// Display format for a confirmed transaction's timestamp.
pub const CONFIRMED_TIME_FORMAT: &str = "%a, %d %b %Y %H:%M:%S";
