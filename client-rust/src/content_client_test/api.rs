use std::{collections::VecDeque, sync::Mutex};

use futures::channel::oneshot;

use crate::{
    errors::{ContentApiError, ContentApiResult},
    ContentApi, ContentDetail, ContentItem, ContentScope, Page, SearchQuery,
};

/// Result for a mocked `search` call.
/// It can either be a page to return or an error to return.
pub enum MockSearchResult {
    Page(Page<ContentItem>),
    Error(ContentApiError),
}

impl From<Page<ContentItem>> for MockSearchResult {
    fn from(page: Page<ContentItem>) -> Self {
        Self::Page(page)
    }
}

impl From<ContentApiError> for MockSearchResult {
    fn from(error: ContentApiError) -> Self {
        Self::Error(error)
    }
}

struct MockSearchCase {
    result: MockSearchResult,
    /// When present, the mock holds the response until the paired sender
    /// fires, letting tests control resolution order of overlapping
    /// requests.
    gate: Option<oneshot::Receiver<()>>,
}

#[derive(Default)]
struct MockContentApiState {
    mocked_search_results: VecDeque<MockSearchCase>,
    mocked_detail_results: VecDeque<ContentApiResult<ContentDetail>>,
    tracked_searches: Vec<(ContentScope, SearchQuery)>,
    tracked_detail_lookups: Vec<(ContentScope, String)>,
}

/// A mock content API for testing that tracks inputs and yields predefined
/// outputs.
#[derive(Default)]
pub struct MockContentApi {
    state: Mutex<MockContentApiState>,
}

impl MockContentApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a result for the next unanswered `search` call.
    pub fn enqueue_search(&self, result: impl Into<MockSearchResult>) {
        self.state
            .lock()
            .unwrap()
            .mocked_search_results
            .push_back(MockSearchCase {
                result: result.into(),
                gate: None,
            });
    }

    /// Enqueue a result that is held until the returned sender fires.
    pub fn enqueue_search_gated(&self, result: impl Into<MockSearchResult>) -> oneshot::Sender<()> {
        let (gate_tx, gate_rx) = oneshot::channel();
        self.state
            .lock()
            .unwrap()
            .mocked_search_results
            .push_back(MockSearchCase {
                result: result.into(),
                gate: Some(gate_rx),
            });
        gate_tx
    }

    /// Enqueue a result for the next `find_by_slug` call.
    pub fn enqueue_detail(&self, result: ContentApiResult<ContentDetail>) {
        self.state
            .lock()
            .unwrap()
            .mocked_detail_results
            .push_back(result);
    }

    /// All `search` inputs observed so far, in call order.
    #[must_use]
    pub fn tracked_searches(&self) -> Vec<(ContentScope, SearchQuery)> {
        self.state.lock().unwrap().tracked_searches.clone()
    }

    #[must_use]
    pub fn search_count(&self) -> usize {
        self.state.lock().unwrap().tracked_searches.len()
    }

    /// All `find_by_slug` inputs observed so far, in call order.
    #[must_use]
    pub fn tracked_detail_lookups(&self) -> Vec<(ContentScope, String)> {
        self.state.lock().unwrap().tracked_detail_lookups.clone()
    }
}

#[async_trait::async_trait]
impl ContentApi for MockContentApi {
    async fn search(
        &self,
        scope: ContentScope,
        query: &SearchQuery,
    ) -> ContentApiResult<Page<ContentItem>> {
        let case = {
            let mut state = self.state.lock().unwrap();
            state.tracked_searches.push((scope, query.clone()));
            state.mocked_search_results.pop_front()
        };
        let Some(case) = case else {
            return Err(ContentApiError::Invariant(
                "mock",
                "no mocked search result".to_string(),
            ));
        };
        if let Some(gate) = case.gate {
            let _ = gate.await;
        }
        match case.result {
            MockSearchResult::Page(page) => Ok(page),
            MockSearchResult::Error(error) => Err(error),
        }
    }

    async fn find_by_slug(
        &self,
        scope: ContentScope,
        slug: &str,
    ) -> ContentApiResult<ContentDetail> {
        let result = {
            let mut state = self.state.lock().unwrap();
            state
                .tracked_detail_lookups
                .push((scope, slug.to_string()));
            state.mocked_detail_results.pop_front()
        };
        result.unwrap_or_else(|| {
            Err(ContentApiError::Invariant(
                "mock",
                "no mocked detail result".to_string(),
            ))
        })
    }
}
