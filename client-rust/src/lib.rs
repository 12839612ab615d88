mod api;
mod client;
mod client_utils;
mod errors;
mod query;
mod session;
mod types;

pub mod content_client_test;

pub use api::ContentApi;
pub use client::{ContentClient, ContentClientOptions};
pub use errors::*;
pub use query::{SearchQuery, DEFAULT_PAGE_LIMIT};
pub use session::{Anonymous, Identity, SessionProvider};
pub use types::*;
