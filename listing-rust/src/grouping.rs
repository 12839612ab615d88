use chrono::{FixedOffset, NaiveDate};
use content_client::ContentItem;

/// How many of the newest items get the "new" badge.
pub const NEW_BADGE_COUNT: usize = 5;

// Display convention is America/Sao_Paulo, which has had no DST since
// 2019, so a fixed UTC-3 offset is exact.
const DISPLAY_OFFSET_SECONDS: i32 = -3 * 3600;

/// An item paired with its cross-cutting "new" badge, which is independent
/// of the day bucketing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedItem {
    pub item: ContentItem,
    pub is_new: bool,
}

/// All items that fall on one display day, newest day first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup {
    /// `MM/DD/YYYY` in the display timezone.
    pub label: String,
    pub day: NaiveDate,
    pub items: Vec<GroupedItem>,
}

/// Bucket a merged collection by the calendar day each item falls on in the
/// fixed display timezone (UTC-3), newest day first.
///
/// The collection is re-sorted by post date descending regardless of the
/// sort order requested from the server; the server parameter only controls
/// which end of the range arrives first across pages. Ties keep their input
/// order. The first [`NEW_BADGE_COUNT`] items of the sorted collection are
/// flagged as new.
#[must_use]
pub fn group_by_day(items: &[ContentItem]) -> Vec<DayGroup> {
    let offset = FixedOffset::east_opt(DISPLAY_OFFSET_SECONDS).unwrap();

    let mut sorted: Vec<&ContentItem> = items.iter().collect();
    sorted.sort_by(|a, b| b.post_date.cmp(&a.post_date));

    let mut groups: Vec<DayGroup> = Vec::new();
    for (index, item) in sorted.into_iter().enumerate() {
        let local = item.post_date.with_timezone(&offset);
        let day = local.date_naive();
        let entry = GroupedItem {
            item: item.clone(),
            is_new: index < NEW_BADGE_COUNT,
        };
        if let Some(group) = groups.iter_mut().find(|group| group.day == day) {
            group.items.push(entry);
        } else {
            groups.push(DayGroup {
                label: local.format("%m/%d/%Y").to_string(),
                day,
                items: vec![entry],
            });
        }
    }

    // Independent ordering pass over the buckets. Must agree with the item
    // sort above: same date source, same descending direction.
    groups.sort_by(|a, b| b.day.cmp(&a.day));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn item(id: &str, post_date: &str) -> ContentItem {
        ContentItem {
            id: id.to_string(),
            name: format!("item {id}"),
            category: "Cosplay".to_string(),
            post_date: post_date.parse::<DateTime<Utc>>().unwrap(),
            slug: format!("item-{id}"),
        }
    }

    #[test]
    fn buckets_by_display_day_newest_first() {
        let items = vec![
            item("1", "2024-03-05T12:00:00Z"),
            item("2", "2024-03-05T08:00:00Z"),
            item("3", "2024-03-01T12:00:00Z"),
        ];
        let groups = group_by_day(&items);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "03/05/2024");
        assert_eq!(groups[0].items.len(), 2);
        assert_eq!(groups[1].label, "03/01/2024");
        assert_eq!(groups[1].items.len(), 1);
        // Fewer than NEW_BADGE_COUNT items in total, so all are new.
        assert!(groups
            .iter()
            .flat_map(|group| &group.items)
            .all(|entry| entry.is_new));
    }

    #[test]
    fn grouping_is_deterministic() {
        let items = vec![
            item("1", "2024-03-05T12:00:00Z"),
            item("2", "2024-03-03T12:00:00Z"),
            item("3", "2024-03-05T12:00:00Z"),
            item("4", "2024-02-28T23:59:59Z"),
        ];
        assert_eq!(group_by_day(&items), group_by_day(&items));
    }

    #[test]
    fn display_day_uses_fixed_utc_minus_three() {
        // 01:00 UTC is 22:00 the previous day at UTC-3.
        let items = vec![item("1", "2024-03-02T01:00:00Z")];
        let groups = group_by_day(&items);
        assert_eq!(groups[0].label, "03/01/2024");
    }

    #[test]
    fn normalizes_oldest_first_input_to_newest_first_display() {
        let items = vec![
            item("1", "2024-03-01T12:00:00Z"),
            item("2", "2024-03-03T12:00:00Z"),
            item("3", "2024-03-05T12:00:00Z"),
        ];
        let groups = group_by_day(&items);
        let labels: Vec<&str> = groups.iter().map(|group| group.label.as_str()).collect();
        assert_eq!(labels, vec!["03/05/2024", "03/03/2024", "03/01/2024"]);
    }

    #[test]
    fn ties_preserve_input_order() {
        let items = vec![
            item("first", "2024-03-05T12:00:00Z"),
            item("second", "2024-03-05T12:00:00Z"),
        ];
        let groups = group_by_day(&items);
        let ids: Vec<&str> = groups[0]
            .items
            .iter()
            .map(|entry| entry.item.id.as_str())
            .collect();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[test]
    fn only_the_five_newest_items_are_flagged_new() {
        let items: Vec<ContentItem> = (1..=7)
            .map(|n| item(&n.to_string(), &format!("2024-03-{n:02}T12:00:00Z")))
            .collect();
        let groups = group_by_day(&items);

        let flagged: Vec<&str> = groups
            .iter()
            .flat_map(|group| &group.items)
            .filter(|entry| entry.is_new)
            .map(|entry| entry.item.id.as_str())
            .collect();
        // Newest five by post date, which are the highest-numbered days.
        assert_eq!(flagged, vec!["7", "6", "5", "4", "3"]);
    }
}
