use crate::{
    client_utils::get_json,
    session::{Anonymous, SessionProvider},
    ContentApi, ContentApiError, ContentApiResult, ContentDetail, ContentItem, ContentScope, Page,
    SearchQuery,
};
use reqwest::{
    header::{self, HeaderName, HeaderValue},
    Client,
};
use std::{sync::Arc, time::Duration};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// HTTP implementation of [`ContentApi`] against the backend content
/// service.
pub struct ContentClient {
    base_url: String,
    api_key: String,
    client: Client,
    session: Arc<dyn SessionProvider>,
}

pub struct ContentClientOptions {
    pub base_url: String,
    /// Frontend API key, sent as `x-api-key` on every request.
    pub api_key: String,
    /// Defaults to [`Anonymous`] when not provided.
    pub session: Option<Arc<dyn SessionProvider>>,
    /// Client-side request timeout. Defaults to 20 seconds; expiry is
    /// reported as a transport error like any other network failure.
    pub timeout: Option<Duration>,
}

impl ContentClient {
    pub fn new(options: ContentClientOptions) -> ContentApiResult<Self> {
        Ok(Self {
            base_url: options.base_url.trim_end_matches('/').to_string(),
            api_key: options.api_key,
            client: Client::builder()
                .timeout(options.timeout.unwrap_or(DEFAULT_TIMEOUT))
                .build()?,
            session: options.session.unwrap_or_else(|| Arc::new(Anonymous)),
        })
    }

    /// Per-request headers: the frontend API key, plus a bearer token when
    /// the session provides one.
    fn request_headers(&self) -> ContentApiResult<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();

        let mut api_key_value = HeaderValue::from_str(&self.api_key).map_err(|error| {
            ContentApiError::InvalidInput(format!("Invalid frontend API key header value: {error}"))
        })?;
        api_key_value.set_sensitive(true);
        headers.insert(HeaderName::from_static("x-api-key"), api_key_value);

        if let Some(token) = self.session.token() {
            let mut value =
                HeaderValue::from_str(&format!("Bearer {token}")).map_err(|error| {
                    ContentApiError::InvalidInput(format!(
                        "Invalid session token header value: {error}"
                    ))
                })?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }

        Ok(headers)
    }
}

#[async_trait::async_trait]
impl ContentApi for ContentClient {
    async fn search(
        &self,
        scope: ContentScope,
        query: &SearchQuery,
    ) -> ContentApiResult<Page<ContentItem>> {
        get_json(
            &self.client,
            &format!("{}/{}/search", self.base_url, scope.path()),
            &query.to_query_pairs(),
            self.request_headers()?,
        )
        .await
    }

    async fn find_by_slug(
        &self,
        scope: ContentScope,
        slug: &str,
    ) -> ContentApiResult<ContentDetail> {
        get_json(
            &self.client,
            &format!("{}/{}/{slug}", self.base_url, scope.path()),
            &[],
            self.request_headers()?,
        )
        .await
    }
}
