use crate::{
    controller::ListingParams, ListingError, ListingPhase, ListingState, PageState,
};
use content_client::{
    ContentApi, ContentApiResult, ContentItem, ContentScope, Month, Page, SearchQuery,
    SessionProvider, SortOrder,
};
use std::{sync::Arc, time::Duration};
use tokio::{
    sync::{mpsc, watch},
    time::{sleep_until, Instant},
};
use tracing::{debug, warn};

pub(crate) enum Command {
    Filter(FilterChange),
    LoadMore,
    Retry,
}

pub(crate) enum FilterChange {
    SearchText(String),
    Month(Option<Month>),
    Category(Option<String>),
    SortOrder(SortOrder),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchKind {
    Replace,
    Append { page: u32 },
}

struct FetchOutcome {
    generation: u64,
    kind: FetchKind,
    result: ContentApiResult<Page<ContentItem>>,
}

/// Owns the listing state and processes commands, debounce deadlines, and
/// fetch outcomes one at a time. Responses are applied synchronously with
/// no suspension between dequeue and state mutation, so a stale response
/// can never interleave with a newer one.
pub(crate) struct Driver {
    scope: ContentScope,
    api: Arc<dyn ContentApi>,
    session: Arc<dyn SessionProvider>,
    debounce: Duration,
    page_limit: u32,
    /// Bumped on every filter mutation. Outgoing fetches are stamped with
    /// the generation at send time; outcomes from any other generation are
    /// discarded unapplied.
    generation: u64,
    /// Pending debounce deadline; rescheduled by each filter mutation.
    deadline: Option<Instant>,
    in_flight: Option<FetchKind>,
    /// The operation a user-initiated retry re-issues.
    last_attempt: Option<FetchKind>,
    state: ListingState,
    commands: mpsc::UnboundedReceiver<Command>,
    state_tx: watch::Sender<ListingState>,
    outcomes_tx: mpsc::UnboundedSender<FetchOutcome>,
    outcomes_rx: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl Driver {
    pub(crate) fn new(
        params: ListingParams,
        commands: mpsc::UnboundedReceiver<Command>,
        state_tx: watch::Sender<ListingState>,
    ) -> Self {
        let (outcomes_tx, outcomes_rx) = mpsc::unbounded_channel();
        let state = state_tx.borrow().clone();
        Self {
            scope: params.scope,
            api: params.api,
            session: params.session,
            debounce: params.debounce,
            page_limit: params.page_limit,
            generation: 0,
            // The initial fetch goes through the same debounce path as a
            // filter mutation, matching the view's mount behavior.
            deadline: Some(Instant::now() + params.debounce),
            in_flight: None,
            last_attempt: None,
            state,
            commands,
            state_tx,
            outcomes_tx,
            outcomes_rx,
        }
    }

    pub(crate) async fn run(mut self) {
        loop {
            let (deadline, armed) = match self.deadline {
                Some(deadline) => (deadline, true),
                None => (Instant::now(), false),
            };
            tokio::select! {
                command = self.commands.recv() => match command {
                    Some(Command::Filter(change)) => self.on_filter_change(change),
                    Some(Command::LoadMore) => self.on_load_more(),
                    Some(Command::Retry) => self.on_retry(),
                    None => break,
                },
                () = sleep_until(deadline), if armed => self.start_replace(),
                Some(outcome) = self.outcomes_rx.recv() => self.on_outcome(outcome),
            }
        }
    }

    fn on_filter_change(&mut self, change: FilterChange) {
        match change {
            FilterChange::SearchText(text) => self.state.filters.search_text = text,
            FilterChange::Month(month) => self.state.filters.month = month,
            FilterChange::Category(category) => self.state.filters.category = category,
            FilterChange::SortOrder(order) => self.state.filters.sort_order = order,
        }
        // Any in-flight response belongs to the previous filter set now,
        // and so does any retryable failure; the superseded fetch must
        // leave no residue in the published state.
        self.generation += 1;
        self.in_flight = None;
        self.last_attempt = None;
        self.state.loading_more = false;
        self.state.load_more_error = None;
        self.deadline = Some(Instant::now() + self.debounce);
        self.publish();
    }

    fn on_load_more(&mut self) {
        // A pending debounce means the pagination cursor is about to be
        // reset; appending to it would mix filter sets.
        if self.in_flight.is_some() || self.deadline.is_some() || !self.state.page.has_more() {
            return;
        }
        self.start_fetch(FetchKind::Append {
            page: self.state.page.current_page + 1,
        });
    }

    fn on_retry(&mut self) {
        // A pending debounce already covers the retry with fresher filters.
        if self.in_flight.is_some() || self.deadline.is_some() {
            return;
        }
        match self.last_attempt {
            Some(FetchKind::Replace) => self.start_replace(),
            Some(kind @ FetchKind::Append { .. }) => self.start_fetch(kind),
            None => {}
        }
    }

    fn start_replace(&mut self) {
        self.deadline = None;
        self.state.phase = ListingPhase::Loading;
        self.state.error = None;
        self.start_fetch(FetchKind::Replace);
    }

    fn start_fetch(&mut self, kind: FetchKind) {
        self.last_attempt = Some(kind);

        if !self.session.identity().can_access(self.scope) {
            let error = Arc::new(ListingError::SessionRequired(self.scope));
            match kind {
                FetchKind::Replace => {
                    self.state.phase = ListingPhase::Failed;
                    self.state.error = Some(error);
                }
                FetchKind::Append { .. } => {
                    self.state.loading_more = false;
                    self.state.load_more_error = Some(error);
                }
            }
            self.publish();
            return;
        }

        if let FetchKind::Append { .. } = kind {
            self.state.loading_more = true;
            self.state.load_more_error = None;
        }
        self.in_flight = Some(kind);

        let page = match kind {
            FetchKind::Replace => 1,
            FetchKind::Append { page } => page,
        };
        let query = SearchQuery {
            page,
            search: self.state.filters.search_text.clone(),
            category: self.state.filters.category.clone(),
            month: self.state.filters.month,
            sort_order: self.state.filters.sort_order,
            limit: self.page_limit,
        };
        let api = Arc::clone(&self.api);
        let scope = self.scope;
        let generation = self.generation;
        let outcomes = self.outcomes_tx.clone();
        tokio::spawn(async move {
            let result = api.search(scope, &query).await;
            let _ = outcomes.send(FetchOutcome {
                generation,
                kind,
                result,
            });
        });
        self.publish();
    }

    fn on_outcome(&mut self, outcome: FetchOutcome) {
        if outcome.generation != self.generation {
            debug!(
                generation = outcome.generation,
                current = self.generation,
                "discarding stale response"
            );
            return;
        }
        self.in_flight = None;

        match (outcome.kind, outcome.result) {
            (FetchKind::Replace, Ok(page)) => {
                self.merge_categories(&page.data);
                self.state.page = PageState {
                    current_page: page.page,
                    total_pages: page.total_pages,
                };
                self.state.phase = if page.data.is_empty() {
                    ListingPhase::Empty
                } else {
                    ListingPhase::Ready
                };
                self.state.items = page.data;
                self.state.error = None;
                self.state.load_more_error = None;
            }
            (FetchKind::Replace, Err(error)) => {
                warn!(%error, "search failed");
                self.state.phase = ListingPhase::Failed;
                self.state.error = Some(Arc::new(error.into()));
            }
            (FetchKind::Append { .. }, Ok(page)) => {
                self.merge_categories(&page.data);
                self.state.page = PageState {
                    current_page: page.page,
                    total_pages: page.total_pages,
                };
                self.state.items.extend(page.data);
                self.state.loading_more = false;
                self.state.load_more_error = None;
            }
            (FetchKind::Append { .. }, Err(error)) => {
                warn!(%error, "load more failed");
                self.state.loading_more = false;
                self.state.load_more_error = Some(Arc::new(error.into()));
            }
        }
        self.publish();
    }

    /// Union of observed categories, first-seen order. Facets are never
    /// removed within a session, even when a later filtered fetch returns
    /// none of them.
    fn merge_categories(&mut self, items: &[ContentItem]) {
        for item in items {
            if !self
                .state
                .categories
                .iter()
                .any(|category| category == &item.category)
            {
                self.state.categories.push(item.category.clone());
            }
        }
    }

    fn publish(&self) {
        let _ = self.state_tx.send(self.state.clone());
    }
}
