//! Background refresh worker for the history view.
//!
//! Adapted fetch orchestration: the worker listens on a watch channel whose
//! value the wallet layer bumps whenever it believes the transaction set
//! changed (e.g. after submitting a payment), runs one fetch per observed
//! change, and reports generation-tagged events back to the owning loop
//! over an mpsc channel. Rapid signal changes coalesce into a single fetch
//! because the watch channel only retains the latest value.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{mpsc, watch};
use tracing::debug;

use crate::client::HistoryClient;
use crate::constants::EVENT_CHANNEL_CAPACITY;
use crate::domain::{Transaction, WalletId};

// ============================================================================
// Events
// ============================================================================

/// Events sent from the refresh worker to the owning loop.
///
/// Generations are allocated from a single counter, so the owner can apply
/// results newest-wins no matter in which order overlapping fetches
/// complete.
#[derive(Debug)]
pub enum HistoryEvent {
    /// A fetch with the given generation was issued.
    FetchStarted {
        /// Generation of the issued fetch.
        generation: u64,
    },
    /// A fetch completed.
    HistoryFetched {
        /// Generation of the completed fetch.
        generation: u64,
        /// The sorted list, or the error message to surface.
        result: Result<Vec<Transaction>, String>,
    },
}

/// Creates the event channel between the refresh worker and the owning loop.
#[must_use]
pub fn event_channel() -> (mpsc::Sender<HistoryEvent>, mpsc::Receiver<HistoryEvent>) {
    mpsc::channel(EVENT_CHANNEL_CAPACITY)
}

// ============================================================================
// Refresh Manager
// ============================================================================

/// Spawns and coordinates history fetches for one wallet.
pub struct RefreshManager {
    client: HistoryClient,
    wallet: WalletId,
    runtime: tokio::runtime::Handle,
    event_tx: mpsc::Sender<HistoryEvent>,
    generation: Arc<AtomicU64>,
}

impl RefreshManager {
    /// Creates a new refresh manager.
    pub fn new(
        client: HistoryClient,
        wallet: WalletId,
        runtime: tokio::runtime::Handle,
        event_tx: mpsc::Sender<HistoryEvent>,
    ) -> Self {
        Self {
            client,
            wallet,
            runtime,
            event_tx,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Issues a single fetch immediately (initial load, manual refresh).
    pub fn request_refresh(&self) {
        let client = self.client.clone();
        let wallet = self.wallet.clone();
        let sender = self.event_tx.clone();
        let generation = next_generation(&self.generation);

        self.runtime.spawn(async move {
            run_fetch(&client, &wallet, generation, &sender).await;
        });
    }

    /// Starts the signal-driven refresh loop.
    ///
    /// The loop fetches once right away, then once per observed change of
    /// the pending-transaction signal. It exits when either channel closes
    /// (the signal sender or the event receiver is dropped).
    pub fn spawn_refresh_loop(&self, mut pending_rx: watch::Receiver<u64>) {
        let client = self.client.clone();
        let wallet = self.wallet.clone();
        let sender = self.event_tx.clone();
        let generation = Arc::clone(&self.generation);

        self.runtime.spawn(async move {
            loop {
                let current = next_generation(&generation);
                if !run_fetch(&client, &wallet, current, &sender).await {
                    break;
                }
                if pending_rx.changed().await.is_err() {
                    debug!("pending-transaction signal closed, stopping refresh loop");
                    break;
                }
            }
        });
    }
}

/// Allocates the next fetch generation.
fn next_generation(counter: &AtomicU64) -> u64 {
    counter.fetch_add(1, Ordering::SeqCst) + 1
}

/// Runs one fetch and reports both events. Returns `false` once the owner
/// has dropped the event receiver.
async fn run_fetch(
    client: &HistoryClient,
    wallet: &WalletId,
    generation: u64,
    sender: &mpsc::Sender<HistoryEvent>,
) -> bool {
    if sender
        .send(HistoryEvent::FetchStarted { generation })
        .await
        .is_err()
    {
        return false;
    }

    let result = client
        .fetch_history(wallet)
        .await
        .map_err(|e| e.to_string());

    sender
        .send(HistoryEvent::HistoryFetched { generation, result })
        .await
        .is_ok()
}
