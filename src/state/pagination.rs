//! Client-side pagination over the fetched transaction list.
//!
//! The page set is derived from the list *length* only and is recomputed
//! from scratch whenever the length changes; there is no incremental
//! diffing. Slicing happens against whatever list the caller holds, which
//! keeps this module free of any data ownership.

use crate::domain::HistoryError;

// ============================================================================
// Page
// ============================================================================

/// One entry of the pagination strip.
///
/// Page ids are 1-based and contiguous. Whenever the page set is non-empty,
/// exactly one page carries `active = true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// 1-based page id.
    pub id: usize,
    /// Whether this page is the one currently displayed.
    pub active: bool,
}

// ============================================================================
// Pagination
// ============================================================================

/// Derived page metadata for a list of `total` items.
///
/// # Example
///
/// ```
/// use wallethist::state::Pagination;
///
/// let mut pagination = Pagination::new(23, 10);
/// assert_eq!(pagination.page_count(), 3);
/// assert_eq!(pagination.active_page(), Some(1));
///
/// pagination.select_page(3).unwrap();
/// assert_eq!(pagination.active_page(), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pages: Vec<Page>,
    page_size: usize,
    total: usize,
}

impl Pagination {
    /// Derives the page set for `total` items at `page_size` items per page.
    ///
    /// An empty list produces zero pages (no pagination strip); otherwise
    /// pages run `1..=ceil(total / page_size)` with page 1 active.
    ///
    /// # Arguments
    ///
    /// * `total` - Number of items in the list
    /// * `page_size` - Items per page (values below 1 are treated as 1)
    #[must_use]
    pub fn new(total: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let page_count = total.div_ceil(page_size);
        let pages = (1..=page_count)
            .map(|id| Page {
                id,
                active: id == 1,
            })
            .collect();
        Self {
            pages,
            page_size,
            total,
        }
    }

    /// Returns the page strip entries.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Returns the number of pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Returns the configured page size.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the total item count the page set was derived from.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Returns `true` if there are no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Returns the id of the active page, or `None` for an empty page set.
    #[must_use]
    pub fn active_page(&self) -> Option<usize> {
        self.pages.iter().find(|page| page.active).map(|page| page.id)
    }

    /// Moves the active flag to the given page.
    ///
    /// # Arguments
    ///
    /// * `id` - 1-based page id to activate
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::InvalidPage` if `id` is not in
    /// `1..=page_count()`; the active page is left unchanged.
    pub fn select_page(&mut self, id: usize) -> Result<(), HistoryError> {
        if id == 0 || id > self.pages.len() {
            return Err(HistoryError::invalid_page(id, self.pages.len()));
        }
        for page in &mut self.pages {
            page.active = page.id == id;
        }
        Ok(())
    }

    /// Returns the nearest valid page id to `id`, or `None` for an empty
    /// page set. Used by the orchestrator to recover from stale navigation
    /// targets instead of failing.
    #[must_use]
    pub fn clamp(&self, id: usize) -> Option<usize> {
        if self.pages.is_empty() {
            return None;
        }
        Some(id.clamp(1, self.pages.len()))
    }

    /// Returns the slice of `items` belonging to the given page.
    ///
    /// The final page may be shorter than the page size.
    ///
    /// # Arguments
    ///
    /// * `items` - The full list the page set was derived from
    /// * `id` - 1-based page id
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::InvalidPage` if `id` is not in
    /// `1..=page_count()`.
    pub fn page_of<'a, T>(&self, items: &'a [T], id: usize) -> Result<&'a [T], HistoryError> {
        if id == 0 || id > self.pages.len() {
            return Err(HistoryError::invalid_page(id, self.pages.len()));
        }
        let start = (id - 1) * self.page_size;
        let end = (start + self.page_size).min(items.len());
        Ok(&items[start.min(items.len())..end])
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(0, crate::constants::PAGE_SIZE)
    }
}

// ============================================================================
// Tests
// ============================================================================
