use crate::{Month, SortOrder};

/// Default page size requested from the search endpoint.
pub const DEFAULT_PAGE_LIMIT: u32 = 900;

/// Typed form of the search endpoint's query string.
///
/// Optional filters left as `None` mean "all"; they are still serialized,
/// as empty strings, because the backend distinguishes an absent filter
/// from a missing parameter only by emptiness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// 1-based page number.
    pub page: u32,
    /// Case-insensitive substring match on the item name. May be empty.
    pub search: String,
    pub category: Option<String>,
    pub month: Option<Month>,
    pub sort_order: SortOrder,
    pub limit: u32,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
            category: None,
            month: None,
            sort_order: SortOrder::default(),
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl SearchQuery {
    /// Serialize to query-string pairs. `sortBy` is fixed to `postDate`;
    /// the endpoint sorts by nothing else.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("search", self.search.clone()),
            ("category", self.category.clone().unwrap_or_default()),
            (
                "month",
                self.month.map(|month| month.code().to_string()).unwrap_or_default(),
            ),
            ("sortBy", "postDate".to_string()),
            ("sortOrder", self.sort_order.direction().to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_serializes_every_parameter() {
        let pairs = SearchQuery::default().to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page", "1".to_string()),
                ("search", String::new()),
                ("category", String::new()),
                ("month", String::new()),
                ("sortBy", "postDate".to_string()),
                ("sortOrder", "DESC".to_string()),
                ("limit", "900".to_string()),
            ]
        );
    }

    #[test]
    fn optional_filters_serialize_to_wire_codes() {
        let query = SearchQuery {
            page: 3,
            search: "alpha".to_string(),
            category: Some("Cosplay".to_string()),
            month: Some(Month::March),
            sort_order: SortOrder::OldestFirst,
            limit: 50,
        };
        let pairs = query.to_query_pairs();
        assert!(pairs.contains(&("page", "3".to_string())));
        assert!(pairs.contains(&("search", "alpha".to_string())));
        assert!(pairs.contains(&("category", "Cosplay".to_string())));
        assert!(pairs.contains(&("month", "03".to_string())));
        assert!(pairs.contains(&("sortOrder", "ASC".to_string())));
        assert!(pairs.contains(&("limit", "50".to_string())));
    }
}
