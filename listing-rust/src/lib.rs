mod controller;
mod driver;
mod errors;
mod grouping;
mod types;

pub use controller::{ListingController, ListingParams, DEFAULT_DEBOUNCE};
pub use errors::ListingError;
pub use grouping::{group_by_day, DayGroup, GroupedItem, NEW_BADGE_COUNT};
pub use types::{FilterState, ListingPhase, ListingState, PageState};
