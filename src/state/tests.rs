//! Tests for the state module.

use std::time::Duration;

use tokio::sync::watch;

use super::{FetchStatus, HistoryState, OverlayState, RefreshManager, event_channel};
use crate::client::{HistoryClient, HttpConfig};
use crate::constants::PAGE_SIZE;
use crate::domain::{PENDING_BLOCK, Transaction, WalletId};
use crate::state::refresh::HistoryEvent;

// ========================================================================
// Test Helper Functions
// ========================================================================

/// Creates a test transaction with the given hash, second offset, and block.
fn create_test_transaction(hash: &str, second: usize, block: i64) -> Transaction {
    Transaction {
        hash: hash.to_string(),
        from: "sender000000000000000000000000000000".to_string(),
        to: "receiver00000000000000000000000000000".to_string(),
        amount: 1.5,
        time_stamp: format!("2024-03-01T10:00:{:02}Z", second.min(59)),
        block,
    }
}

/// Creates `count` transactions with distinct timestamps, newest first.
fn create_test_history(count: usize) -> Vec<Transaction> {
    (0..count)
        .map(|i| create_test_transaction(&format!("tx{i}"), count - i, 100 + i as i64))
        .collect()
}

// ========================================================================
// Fetch / Pagination Tests
// ========================================================================

#[test]
fn test_initial_state_is_empty_and_idle() {
    let state = HistoryState::new();
    assert!(state.transactions().is_empty());
    assert!(state.pagination().is_empty());
    assert!(state.current_page().is_empty());
    assert_eq!(*state.status(), FetchStatus::Idle);
}

#[test]
fn test_fetch_populates_pages() {
    let mut state = HistoryState::new();
    let generation = state.begin_fetch();
    assert_eq!(*state.status(), FetchStatus::Loading);

    state.on_fetched(generation, Ok(create_test_history(23)));

    assert_eq!(*state.status(), FetchStatus::Ready);
    assert_eq!(state.pagination().page_count(), 3);
    assert_eq!(state.pagination().active_page(), Some(1));
    assert_eq!(state.current_page().len(), PAGE_SIZE);
    assert_eq!(state.current_page()[0].hash, "tx0");
}

#[test]
fn test_select_page_reslices_without_refetch() {
    let mut state = HistoryState::new();
    let generation = state.begin_fetch();
    state.on_fetched(generation, Ok(create_test_history(23)));

    let page3 = state.on_select_page(3);
    assert_eq!(page3.len(), 3);
    assert_eq!(page3[0].hash, "tx20");
    assert_eq!(state.pagination().active_page(), Some(3));
}

#[test]
fn test_select_page_clamps_out_of_range_ids() {
    let mut state = HistoryState::new();
    let generation = state.begin_fetch();
    state.on_fetched(generation, Ok(create_test_history(23)));

    // A stale click target beyond the last page lands on the last page.
    let page = state.on_select_page(9);
    assert_eq!(page.len(), 3);
    assert_eq!(state.pagination().active_page(), Some(3));

    // Page id 0 lands on page 1.
    state.on_select_page(0);
    assert_eq!(state.pagination().active_page(), Some(1));
}

#[test]
fn test_select_page_with_no_pages_returns_empty() {
    let mut state = HistoryState::new();
    assert!(state.on_select_page(1).is_empty());
}

#[test]
fn test_refresh_with_changed_length_resets_to_page_one() {
    let mut state = HistoryState::new();
    let generation = state.begin_fetch();
    state.on_fetched(generation, Ok(create_test_history(23)));
    state.on_select_page(3);

    // The refreshed list no longer covers page 3.
    let generation = state.begin_fetch();
    state.on_fetched(generation, Ok(create_test_history(5)));

    assert_eq!(state.pagination().page_count(), 1);
    assert_eq!(state.pagination().active_page(), Some(1));
    assert_eq!(state.current_page().len(), 5);
}

#[test]
fn test_refresh_with_same_length_keeps_active_page() {
    let mut state = HistoryState::new();
    let generation = state.begin_fetch();
    state.on_fetched(generation, Ok(create_test_history(23)));
    state.on_select_page(2);

    let generation = state.begin_fetch();
    state.on_fetched(generation, Ok(create_test_history(23)));

    assert_eq!(state.pagination().active_page(), Some(2));
    assert_eq!(state.current_page().len(), PAGE_SIZE);
}

// ========================================================================
// Fetch Ordering Tests
// ========================================================================

#[test]
fn test_overlapping_fetches_all_completion_orders() {
    struct TestCase {
        name: &'static str,
        // (generation, item count) in completion order
        completions: Vec<(u64, usize)>,
        expected_len: usize,
    }

    let cases = [
        TestCase {
            name: "in-order completion shows the later fetch",
            completions: vec![(1, 10), (2, 4)],
            expected_len: 4,
        },
        TestCase {
            name: "stale response after newer one is discarded",
            completions: vec![(2, 4), (1, 10)],
            expected_len: 4,
        },
        TestCase {
            name: "three fetches completing backwards",
            completions: vec![(3, 7), (2, 4), (1, 10)],
            expected_len: 7,
        },
    ];

    for case in cases {
        let mut state = HistoryState::new();
        let issued = case.completions.iter().map(|(g, _)| *g).max().unwrap();
        for generation in 1..=issued {
            state.on_fetch_started(generation);
        }
        for (generation, count) in &case.completions {
            state.on_fetched(*generation, Ok(create_test_history(*count)));
        }

        assert_eq!(
            state.transactions().len(),
            case.expected_len,
            "{}",
            case.name
        );
        assert_eq!(*state.status(), FetchStatus::Ready, "{}", case.name);
    }
}

#[test]
fn test_failed_fetch_keeps_previous_list() {
    let mut state = HistoryState::new();
    let generation = state.begin_fetch();
    state.on_fetched(generation, Ok(create_test_history(23)));
    state.on_select_page(2);

    let generation = state.begin_fetch();
    state.on_fetched(generation, Err("connection refused".to_string()));

    // List, pages, and active page survive the failure; only the status
    // reports it.
    assert_eq!(state.transactions().len(), 23);
    assert_eq!(state.pagination().active_page(), Some(2));
    assert_eq!(
        *state.status(),
        FetchStatus::Error("connection refused".to_string())
    );
}

#[test]
fn test_stale_success_cannot_override_newer_failure() {
    let mut state = HistoryState::new();
    state.on_fetch_started(1);
    state.on_fetch_started(2);

    state.on_fetched(2, Err("timed out".to_string()));
    state.on_fetched(1, Ok(create_test_history(10)));

    assert!(state.transactions().is_empty());
    assert_eq!(*state.status(), FetchStatus::Error("timed out".to_string()));
}

#[test]
fn test_early_result_applies_but_newer_fetch_settles_status() {
    let mut state = HistoryState::new();
    state.on_fetch_started(1);
    state.on_fetch_started(2);

    // The older fetch lands first: its data shows, but the view keeps
    // loading until the newest fetch reports.
    state.on_fetched(1, Ok(create_test_history(10)));
    assert_eq!(state.transactions().len(), 10);
    assert_eq!(*state.status(), FetchStatus::Loading);

    state.on_fetched(2, Ok(create_test_history(12)));
    assert_eq!(state.transactions().len(), 12);
    assert_eq!(*state.status(), FetchStatus::Ready);
}

// ========================================================================
// Selection Tests
// ========================================================================

#[test]
fn test_row_selection_flow() {
    let mut state = HistoryState::new();
    let generation = state.begin_fetch();
    let mut history = create_test_history(12);
    history[3] = create_test_transaction("pending-tx", 40, PENDING_BLOCK);
    state.on_fetched(generation, Ok(history));

    assert!(state.on_select_row(3));
    assert_eq!(state.selection().overlay(), OverlayState::Visible);
    assert_eq!(state.selection().transaction().unwrap().hash, "pending-tx");

    state.on_request_close();
    assert_eq!(state.selection().overlay(), OverlayState::Closing);

    state.on_overlay_settled();
    assert_eq!(state.selection().overlay(), OverlayState::Hidden);
    // The selection itself survives dismissal.
    assert_eq!(state.selection().transaction().unwrap().hash, "pending-tx");
}

#[test]
fn test_select_row_out_of_page_bounds() {
    let mut state = HistoryState::new();
    let generation = state.begin_fetch();
    state.on_fetched(generation, Ok(create_test_history(3)));

    assert!(!state.on_select_row(3));
    assert!(state.selection().transaction().is_none());
}

#[test]
fn test_refresh_does_not_clear_selection() {
    let mut state = HistoryState::new();
    let generation = state.begin_fetch();
    state.on_fetched(generation, Ok(create_test_history(12)));
    state.on_select_row(0);

    let generation = state.begin_fetch();
    state.on_fetched(generation, Ok(create_test_history(4)));

    assert_eq!(state.selection().overlay(), OverlayState::Visible);
    assert_eq!(state.selection().transaction().unwrap().hash, "tx0");

    state.clear_selection();
    assert!(state.selection().transaction().is_none());
}

// ========================================================================
// Refresh Worker Tests
// ========================================================================

/// Client pointed at a closed port with a short timeout: every fetch fails
/// fast, which is all these tests need to observe event flow.
fn unreachable_client() -> HistoryClient {
    HistoryClient::with_http_config(
        "http://127.0.0.1:9",
        HttpConfig::with_timeout(Duration::from_millis(500)),
    )
}

#[tokio::test]
async fn test_request_refresh_emits_started_then_fetched() {
    let (event_tx, mut event_rx) = event_channel();
    let manager = RefreshManager::new(
        unreachable_client(),
        WalletId::new("0xabc123"),
        tokio::runtime::Handle::current(),
        event_tx,
    );

    manager.request_refresh();

    match event_rx.recv().await.expect("started event") {
        HistoryEvent::FetchStarted { generation } => assert_eq!(generation, 1),
        other => panic!("expected FetchStarted, got {other:?}"),
    }
    match event_rx.recv().await.expect("fetched event") {
        HistoryEvent::HistoryFetched { generation, result } => {
            assert_eq!(generation, 1);
            assert!(result.is_err());
        }
        other => panic!("expected HistoryFetched, got {other:?}"),
    }
}

#[tokio::test]
async fn test_refresh_loop_fetches_once_per_signal_change() {
    let (event_tx, mut event_rx) = event_channel();
    let (signal_tx, signal_rx) = watch::channel(0u64);
    let manager = RefreshManager::new(
        unreachable_client(),
        WalletId::new("0xabc123"),
        tokio::runtime::Handle::current(),
        event_tx,
    );

    manager.spawn_refresh_loop(signal_rx);

    // Initial fetch runs without any signal change.
    match event_rx.recv().await.expect("initial started event") {
        HistoryEvent::FetchStarted { generation } => assert_eq!(generation, 1),
        other => panic!("expected FetchStarted, got {other:?}"),
    }
    assert!(matches!(
        event_rx.recv().await,
        Some(HistoryEvent::HistoryFetched { generation: 1, .. })
    ));

    // One more fetch after the pending-transaction signal changes.
    signal_tx.send(1).expect("loop should still listen");
    assert!(matches!(
        event_rx.recv().await,
        Some(HistoryEvent::FetchStarted { generation: 2 })
    ));
    assert!(matches!(
        event_rx.recv().await,
        Some(HistoryEvent::HistoryFetched { generation: 2, .. })
    ));
}
