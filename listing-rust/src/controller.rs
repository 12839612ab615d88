use crate::{
    driver::{Command, Driver, FilterChange},
    FilterState, ListingError, ListingState,
};
use content_client::{
    Anonymous, ContentApi, ContentScope, Month, SessionProvider, SortOrder, DEFAULT_PAGE_LIMIT,
};
use std::{sync::Arc, time::Duration};
use tokio::sync::{mpsc, watch};

/// Quiet period between the last filter mutation and the fetch it
/// schedules.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Parameters required to create a listing controller.
/// # Default Values
/// - `session`: [`Anonymous`]
/// - `debounce`: 300 ms
/// - `page_limit`: [`DEFAULT_PAGE_LIMIT`]
/// - `initial_filters`: [`FilterState::default`]
pub struct ListingParams {
    /// The content scope this listing reads from.
    pub scope: ContentScope,
    pub api: Arc<dyn ContentApi>,
    /// Gates which scope the controller may call; no authorization logic
    /// beyond reading the identity flags.
    pub session: Arc<dyn SessionProvider>,
    pub debounce: Duration,
    /// Page size requested from the search endpoint.
    pub page_limit: u32,
    pub initial_filters: FilterState,
}

impl ListingParams {
    #[must_use]
    pub fn new(scope: ContentScope, api: Arc<dyn ContentApi>) -> Self {
        Self {
            scope,
            api,
            session: Arc::new(Anonymous),
            debounce: DEFAULT_DEBOUNCE,
            page_limit: DEFAULT_PAGE_LIMIT,
            initial_filters: FilterState::default(),
        }
    }

    #[must_use]
    pub fn session(mut self, session: Arc<dyn SessionProvider>) -> Self {
        self.session = session;
        self
    }

    #[must_use]
    pub fn debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    #[must_use]
    pub fn page_limit(mut self, page_limit: u32) -> Self {
        self.page_limit = page_limit;
        self
    }

    #[must_use]
    pub fn initial_filters(mut self, filters: FilterState) -> Self {
        self.initial_filters = filters;
        self
    }
}

/// Handle to a running listing controller.
///
/// Filter setters schedule a debounced replace fetch; `load_more` appends
/// the next page. The view observes state through [`Self::state`] or
/// [`Self::watch`]. Dropping the handle stops the controller and discards
/// its state.
pub struct ListingController {
    commands: mpsc::UnboundedSender<Command>,
    state: watch::Receiver<ListingState>,
}

impl ListingController {
    /// Spawn the controller on the current tokio runtime. An initial fetch
    /// for the given filters is scheduled through the debounce window.
    #[must_use]
    pub fn spawn(params: ListingParams) -> Self {
        let (commands_tx, commands_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) =
            watch::channel(ListingState::initial(params.initial_filters.clone()));
        tokio::spawn(Driver::new(params, commands_rx, state_tx).run());
        Self {
            commands: commands_tx,
            state: state_rx,
        }
    }

    pub fn builder(scope: ContentScope, api: Arc<dyn ContentApi>) -> ListingParams {
        ListingParams::new(scope, api)
    }

    pub fn set_search_text(&self, text: impl Into<String>) -> Result<(), ListingError> {
        self.send(Command::Filter(FilterChange::SearchText(text.into())))
    }

    pub fn set_month(&self, month: Option<Month>) -> Result<(), ListingError> {
        self.send(Command::Filter(FilterChange::Month(month)))
    }

    pub fn set_category(&self, category: Option<String>) -> Result<(), ListingError> {
        self.send(Command::Filter(FilterChange::Category(category)))
    }

    pub fn set_sort_order(&self, order: SortOrder) -> Result<(), ListingError> {
        self.send(Command::Filter(FilterChange::SortOrder(order)))
    }

    /// Request the next page. A no-op while a load is in flight or when the
    /// server reports no further pages.
    pub fn load_more(&self) -> Result<(), ListingError> {
        self.send(Command::LoadMore)
    }

    /// Re-issue the last attempted fetch after a failure.
    pub fn retry(&self) -> Result<(), ListingError> {
        self.send(Command::Retry)
    }

    /// Snapshot of the current view state.
    #[must_use]
    pub fn state(&self) -> ListingState {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes.
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<ListingState> {
        self.state.clone()
    }

    fn send(&self, command: Command) -> Result<(), ListingError> {
        self.commands
            .send(command)
            .map_err(|_| ListingError::ControllerStopped)
    }
}
