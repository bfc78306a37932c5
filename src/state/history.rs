//! Orchestrator state for the wallet history view.
//!
//! [`HistoryState`] owns the fetched transaction list, the derived page set,
//! the detail-overlay selection, and the fetch status. All transitions are
//! synchronous and pure with respect to scheduling: the async side (the
//! refresh worker) only tags its results with a generation and delivers
//! them here, which makes completion-order races reproducible in tests by
//! calling the transitions in the order under scrutiny.

use tracing::{trace, warn};

use crate::constants::PAGE_SIZE;
use crate::domain::Transaction;
use crate::state::pagination::Pagination;
use crate::state::selection::Selection;

// ============================================================================
// Fetch Status
// ============================================================================

/// Load/error status of the history list, for the render layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    /// No fetch has been issued yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The list reflects the latest completed fetch.
    Ready,
    /// The latest completed fetch failed; the previous list is still shown.
    Error(String),
}

// ============================================================================
// History State
// ============================================================================

/// The history view's complete state with pure transition functions.
///
/// Fetches are identified by a monotonically increasing generation. Results
/// are applied newest-wins: a result whose generation is not newer than the
/// last applied one is discarded, so a slow stale response can never
/// overwrite fresher data regardless of completion order.
#[derive(Debug, Default)]
pub struct HistoryState {
    transactions: Vec<Transaction>,
    pagination: Pagination,
    selection: Selection,
    status: FetchStatus,
    latest_started: u64,
    applied: u64,
}

impl HistoryState {
    /// Creates an empty history state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Returns the full sorted transaction list.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Returns the derived page set.
    #[must_use]
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Returns the detail-overlay selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns the current fetch status.
    #[must_use]
    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    /// Returns the slice of transactions on the active page.
    #[must_use]
    pub fn current_page(&self) -> &[Transaction] {
        match self.pagination.active_page() {
            Some(id) => self
                .pagination
                .page_of(&self.transactions, id)
                .unwrap_or(&[]),
            None => &[],
        }
    }

    // ========================================================================
    // Fetch Transitions
    // ========================================================================

    /// Allocates the next fetch generation and marks the view loading.
    ///
    /// Embedders that drive fetches themselves call this when issuing a
    /// request and hand the returned generation to [`Self::on_fetched`].
    /// The refresh worker performs the same bookkeeping through
    /// [`Self::on_fetch_started`] events.
    pub fn begin_fetch(&mut self) -> u64 {
        self.latest_started += 1;
        self.status = FetchStatus::Loading;
        self.latest_started
    }

    /// Records that a fetch with the given generation was issued.
    pub fn on_fetch_started(&mut self, generation: u64) {
        if generation > self.latest_started {
            self.latest_started = generation;
            self.status = FetchStatus::Loading;
        }
    }

    /// Applies a completed fetch.
    ///
    /// Results are applied newest-wins by generation. On success the list is
    /// replaced and the page set recomputed: a changed list length rebuilds
    /// the pages with page 1 active (an out-of-range active page is thereby
    /// impossible), while an unchanged length keeps the active page and
    /// re-slices the fresh list. On failure the previous list, pagination,
    /// and selection are left untouched and only the status changes. Either
    /// way the generation is consumed, so an older in-flight success cannot
    /// overwrite state afterwards.
    ///
    /// # Arguments
    ///
    /// * `generation` - The generation the fetch was issued with
    /// * `result` - The sorted list, or the error message to surface
    pub fn on_fetched(&mut self, generation: u64, result: Result<Vec<Transaction>, String>) {
        if generation <= self.applied {
            trace!(
                generation,
                applied = self.applied,
                "discarding stale fetch result"
            );
            return;
        }
        self.applied = generation;

        // A newer fetch may still be in flight; only it settles the status.
        let settles = generation >= self.latest_started;

        match result {
            Ok(transactions) => {
                let length_changed = transactions.len() != self.transactions.len();
                self.transactions = transactions;
                if length_changed {
                    self.pagination = Pagination::new(self.transactions.len(), PAGE_SIZE);
                }
                if settles {
                    self.status = FetchStatus::Ready;
                }
            }
            Err(message) => {
                warn!(generation, %message, "history fetch failed");
                if settles {
                    self.status = FetchStatus::Error(message);
                }
            }
        }
    }

    // ========================================================================
    // Navigation Transitions
    // ========================================================================

    /// Activates a page and returns its slice.
    ///
    /// An out-of-range id (a stale click target, e.g. a strip rendered
    /// before a refresh shrank the list) is clamped to the nearest valid
    /// page instead of failing. With no pages at all the empty slice is
    /// returned.
    ///
    /// # Arguments
    ///
    /// * `id` - 1-based page id to display
    pub fn on_select_page(&mut self, id: usize) -> &[Transaction] {
        let Some(target) = self.pagination.clamp(id) else {
            return &[];
        };
        if target != id {
            warn!(requested = id, clamped = target, "page id out of range");
        }
        if self.pagination.select_page(target).is_err() {
            return &[];
        }
        self.current_page()
    }

    /// Opens the detail overlay for a row of the current page.
    ///
    /// # Arguments
    ///
    /// * `row` - 0-based index into the current page's slice
    ///
    /// # Returns
    ///
    /// `true` if the row existed and was selected.
    pub fn on_select_row(&mut self, row: usize) -> bool {
        let Some(transaction) = self.current_page().get(row).cloned() else {
            return false;
        };
        self.selection.select(transaction);
        true
    }

    /// Requests dismissal of the detail overlay.
    pub fn on_request_close(&mut self) {
        self.selection.request_close();
    }

    /// Settles a dismissed overlay to hidden once the render layer is done.
    pub fn on_overlay_settled(&mut self) {
        self.selection.settle();
    }

    /// Clears the selection outright (e.g. when the view is torn down).
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }
}
