//! Selection state for the transaction detail overlay.
//!
//! This module tracks which single transaction (if any) is opened in the
//! detail overlay, together with the overlay's visibility. Visibility is a
//! tri-state: `Closing` is the transient window in which the render layer
//! plays its exit animation before the owner settles the overlay to
//! `Hidden`.

use crate::domain::Transaction;

// ============================================================================
// Overlay State
// ============================================================================

/// Visibility of the transaction detail overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    /// The overlay is not shown.
    #[default]
    Hidden,
    /// Dismissal was requested; the exit animation may still be running.
    Closing,
    /// The overlay is shown.
    Visible,
}

impl OverlayState {
    /// Returns `true` while the overlay occupies the screen (visible or
    /// still playing its exit animation).
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Visible | Self::Closing)
    }

    /// Returns the name of the overlay state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::Closing => "closing",
            Self::Visible => "visible",
        }
    }
}

// ============================================================================
// Selection
// ============================================================================

/// The transaction currently opened for detail display, if any.
///
/// Selecting copies the transaction by value, so a later refresh that
/// replaces the list never invalidates an open overlay. The selection is
/// only emptied by an explicit [`Selection::clear`]; dismissing the overlay
/// keeps the last selected transaction around.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    transaction: Option<Transaction>,
    overlay: OverlayState,
}

impl Selection {
    /// Creates an empty selection with a hidden overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selected transaction, if any.
    #[must_use]
    pub fn transaction(&self) -> Option<&Transaction> {
        self.transaction.as_ref()
    }

    /// Returns the overlay visibility.
    #[must_use]
    pub const fn overlay(&self) -> OverlayState {
        self.overlay
    }

    /// Stores a copy of the transaction and shows the overlay.
    ///
    /// No validation is performed; a pending transaction (no confirmed
    /// block yet) is as selectable as a confirmed one.
    pub fn select(&mut self, transaction: Transaction) {
        self.transaction = Some(transaction);
        self.overlay = OverlayState::Visible;
    }

    /// Requests dismissal of a visible overlay.
    ///
    /// Moves `Visible` to `Closing`; the owner settles the overlay to
    /// `Hidden` once the render layer has finished with it. No-op when the
    /// overlay is not visible.
    pub fn request_close(&mut self) {
        if self.overlay == OverlayState::Visible {
            self.overlay = OverlayState::Closing;
        }
    }

    /// Settles a closing overlay to hidden. The selection itself is kept.
    pub fn settle(&mut self) {
        if self.overlay == OverlayState::Closing {
            self.overlay = OverlayState::Hidden;
        }
    }

    /// Resets to the empty selection with a hidden overlay.
    pub fn clear(&mut self) {
        self.transaction = None;
        self.overlay = OverlayState::Hidden;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PENDING_BLOCK;

    fn pending_transaction() -> Transaction {
        Transaction {
            hash: "abc123".to_string(),
            from: "sender".to_string(),
            to: "receiver".to_string(),
            amount: 4.2,
            time_stamp: "2024-03-01T09:30:00Z".to_string(),
            block: PENDING_BLOCK,
        }
    }

    #[test]
    fn test_select_shows_overlay() {
        let mut selection = Selection::new();
        assert_eq!(selection.overlay(), OverlayState::Hidden);
        assert!(selection.transaction().is_none());

        selection.select(pending_transaction());
        assert_eq!(selection.overlay(), OverlayState::Visible);
        assert_eq!(selection.transaction().unwrap().hash, "abc123");
    }

    #[test]
    fn test_close_then_settle_keeps_selection() {
        let mut selection = Selection::new();
        selection.select(pending_transaction());

        selection.request_close();
        assert_eq!(selection.overlay(), OverlayState::Closing);
        assert!(selection.overlay().is_open());

        selection.settle();
        assert_eq!(selection.overlay(), OverlayState::Hidden);
        // Dismissing the overlay is not clear(): the last selected
        // transaction stays available.
        assert_eq!(selection.transaction().unwrap().hash, "abc123");
    }

    #[test]
    fn test_request_close_ignored_when_hidden() {
        let mut selection = Selection::new();
        selection.request_close();
        assert_eq!(selection.overlay(), OverlayState::Hidden);
    }

    #[test]
    fn test_settle_ignored_when_visible() {
        let mut selection = Selection::new();
        selection.select(pending_transaction());
        selection.settle();
        assert_eq!(selection.overlay(), OverlayState::Visible);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut selection = Selection::new();
        selection.select(pending_transaction());
        selection.clear();

        assert!(selection.transaction().is_none());
        assert_eq!(selection.overlay(), OverlayState::Hidden);
    }

    #[test]
    fn test_overlay_state_names() {
        assert_eq!(OverlayState::Hidden.as_str(), "hidden");
        assert_eq!(OverlayState::Closing.as_str(), "closing");
        assert_eq!(OverlayState::Visible.as_str(), "visible");
        assert!(!OverlayState::Hidden.is_open());
    }
}
