use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single catalogue entry as returned by the search endpoint.
///
/// Immutable once fetched. Identity is `id`; uniqueness within a result set
/// is assumed, not enforced client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub post_date: DateTime<Utc>,
    pub slug: String,
}

/// The full record for a single catalogue entry, fetched by slug.
///
/// Carries the authenticated-only download links on top of the listing
/// fields: `link` is the primary link, `link_p`/`link_g` are alternate
/// hosts, and the `link_mv*` fields are mirrors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDetail {
    pub id: String,
    pub name: String,
    pub category: String,
    pub post_date: DateTime<Utc>,
    pub slug: String,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_p: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_g: Option<String>,
    #[serde(rename = "linkMV1", default, skip_serializing_if = "Option::is_none")]
    pub link_mv1: Option<String>,
    #[serde(rename = "linkMV2", default, skip_serializing_if = "Option::is_none")]
    pub link_mv2: Option<String>,
    #[serde(rename = "linkMV3", default, skip_serializing_if = "Option::is_none")]
    pub link_mv3: Option<String>,
}

/// One page of a paginated response. The backend declares the pagination
/// cursor; the client never computes totals itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
    pub data: Vec<T>,
}

/// The content resource a request targets. The VIP scope additionally
/// requires the caller to hold a session whose identity carries the VIP
/// flag; enforcement lives with the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentScope {
    Free,
    Vip,
}

impl ContentScope {
    /// Path segment of this scope's resource.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Free => "freecontent",
            Self::Vip => "vipcontent",
        }
    }
}

impl fmt::Display for ContentScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Calendar month filter. The wire format is a two-digit code; absence
/// means "all months".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Two-digit code sent to the search endpoint.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::January => "01",
            Self::February => "02",
            Self::March => "03",
            Self::April => "04",
            Self::May => "05",
            Self::June => "06",
            Self::July => "07",
            Self::August => "08",
            Self::September => "09",
            Self::October => "10",
            Self::November => "11",
            Self::December => "12",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|month| month.code() == code)
    }
}

/// Which end of the date range the server returns first across pages.
/// Display-side grouping re-sorts descending regardless; see the listing
/// crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    NewestFirst,
    OldestFirst,
}

impl SortOrder {
    /// Wire value of the `sortOrder` parameter.
    #[must_use]
    pub fn direction(self) -> &'static str {
        match self {
            Self::NewestFirst => "DESC",
            Self::OldestFirst => "ASC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_codes_round_trip() {
        for month in Month::ALL {
            assert_eq!(Month::from_code(month.code()), Some(month));
        }
        assert_eq!(Month::from_code("13"), None);
        assert_eq!(Month::from_code(""), None);
    }

    #[test]
    fn content_item_uses_camel_case_wire_names() {
        let json = serde_json::json!({
            "id": "42",
            "name": "Example",
            "category": "Cosplay",
            "postDate": "2024-03-05T12:00:00Z",
            "slug": "example",
        });
        let item: ContentItem = serde_json::from_value(json).unwrap();
        assert_eq!(item.id, "42");
        assert_eq!(
            item.post_date,
            "2024-03-05T12:00:00Z".parse::<DateTime<Utc>>().unwrap()
        );
    }

    #[test]
    fn content_detail_parses_mirror_links() {
        let json = serde_json::json!({
            "id": "42",
            "name": "Example",
            "category": "Cosplay",
            "postDate": "2024-03-05T12:00:00Z",
            "slug": "example",
            "link": "https://mega.nz/file/abc",
            "linkP": "https://pixeldrain.com/u/abc",
            "linkMV1": "https://mega.nz/file/mirror",
        });
        let detail: ContentDetail = serde_json::from_value(json).unwrap();
        assert_eq!(detail.link, "https://mega.nz/file/abc");
        assert_eq!(detail.link_p.as_deref(), Some("https://pixeldrain.com/u/abc"));
        assert_eq!(detail.link_g, None);
        assert_eq!(detail.link_mv1.as_deref(), Some("https://mega.nz/file/mirror"));
    }
}
