//! Transaction history engine for wallet front ends.
//!
//! `wallethist` powers a wallet's history view: it fetches the full
//! transaction list for a wallet from the node's HTTP API, keeps it sorted
//! newest-first, slices it into fixed-size pages, and tracks which
//! transaction is opened in the detail overlay. Rendering is left entirely
//! to the embedding front end, which consumes the state and calls the
//! transition functions in response to user gestures.
//!
//! # Architecture
//!
//! - [`domain`] - transaction records, wallet identity, error taxonomy
//! - [`client`] - typed client for the node's history endpoint
//! - [`state`] - pagination, selection, the orchestrator state, and the
//!   background refresh worker
//! - [`format`] - pure display helpers for rows and the detail overlay
//! - [`config`] - API endpoint configuration with persistence
//!
//! # Example
//!
//! ```ignore
//! use tokio::sync::watch;
//! use wallethist::{AppConfig, HistoryClient, HistoryEvent, HistoryState,
//!     RefreshManager, WalletId, event_channel};
//!
//! let config = AppConfig::load();
//! let wallet = WalletId::new(session_public_key);
//! let (event_tx, mut event_rx) = event_channel();
//! let (pending_tx, pending_rx) = watch::channel(0u64);
//!
//! let manager = RefreshManager::new(
//!     HistoryClient::from_config(&config),
//!     wallet,
//!     tokio::runtime::Handle::current(),
//!     event_tx,
//! );
//! manager.spawn_refresh_loop(pending_rx);
//!
//! let mut state = HistoryState::new();
//! while let Some(event) = event_rx.recv().await {
//!     match event {
//!         HistoryEvent::FetchStarted { generation } => state.on_fetch_started(generation),
//!         HistoryEvent::HistoryFetched { generation, result } => {
//!             state.on_fetched(generation, result);
//!         }
//!     }
//!     // hand (state.pagination(), state.current_page(), state.selection(),
//!     // state.status()) to the render layer
//! }
//! ```

pub mod client;
pub mod config;
pub mod constants;
pub mod domain;
pub mod format;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{HistoryClient, HttpClient, HttpConfig};
pub use config::AppConfig;
pub use domain::{HistoryError, Transaction, WalletId};
pub use state::{
    FetchStatus, HistoryEvent, HistoryState, OverlayState, Page, Pagination, RefreshManager,
    Selection, event_channel,
};
