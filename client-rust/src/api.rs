use crate::{ContentApiResult, ContentDetail, ContentItem, ContentScope, Page, SearchQuery};

/// The backend content API as consumed by the listing views.
#[async_trait::async_trait]
pub trait ContentApi: Send + Sync {
    /// One page of catalogue entries matching the query.
    async fn search(
        &self,
        scope: ContentScope,
        query: &SearchQuery,
    ) -> ContentApiResult<Page<ContentItem>>;

    /// The full record for a single entry, including download links.
    async fn find_by_slug(
        &self,
        scope: ContentScope,
        slug: &str,
    ) -> ContentApiResult<ContentDetail>;
}
