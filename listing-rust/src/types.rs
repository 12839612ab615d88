use crate::{grouping::group_by_day, DayGroup, ListingError};
use content_client::{ContentItem, Month, SortOrder};
use std::sync::Arc;

/// User filter intent. Mutating any field invalidates the current result
/// collection and resets pagination to page 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_text: String,
    /// `None` means all months.
    pub month: Option<Month>,
    /// `None` means all categories.
    pub category: Option<String>,
    pub sort_order: SortOrder,
}

/// Server-declared pagination cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageState {
    pub current_page: u32,
    pub total_pages: u32,
}

impl PageState {
    #[must_use]
    pub fn has_more(self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Replace-level status of the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingPhase {
    /// A replace fetch is pending or in flight.
    Loading,
    Ready,
    /// The latest replace fetch returned no items. Distinct from `Failed`.
    Empty,
    /// The latest replace fetch failed; the collection is left as it was.
    Failed,
}

/// Snapshot of the controller's view state, published on every change.
#[derive(Debug, Clone)]
pub struct ListingState {
    pub filters: FilterState,
    /// Concatenation of all pages fetched since the last filter reset, in
    /// server-returned order.
    pub items: Vec<ContentItem>,
    pub page: PageState,
    /// Category facets observed across fetches, in first-seen order. Never
    /// shrinks within a session.
    pub categories: Vec<String>,
    pub phase: ListingPhase,
    /// A load-more fetch is in flight.
    pub loading_more: bool,
    /// Error from the latest replace fetch, cleared on the next success.
    pub error: Option<Arc<ListingError>>,
    /// Error from the latest load-more fetch; the already-loaded items are
    /// preserved alongside it.
    pub load_more_error: Option<Arc<ListingError>>,
}

impl ListingState {
    pub(crate) fn initial(filters: FilterState) -> Self {
        Self {
            filters,
            items: Vec::new(),
            page: PageState::default(),
            categories: Vec::new(),
            phase: ListingPhase::Loading,
            loading_more: false,
            error: None,
            load_more_error: None,
        }
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.page.has_more()
    }

    /// The collection bucketed by display day for rendering.
    #[must_use]
    pub fn grouped(&self) -> Vec<DayGroup> {
        group_by_day(&self.items)
    }
}
