//! Test doubles for crates consuming the content API.

mod api;

pub use api::{MockContentApi, MockSearchResult};

use crate::{Identity, SessionProvider};

/// A session provider with fixed token and identity.
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    pub token: Option<String>,
    pub identity: Identity,
}

impl StaticSession {
    /// A session holding the VIP flag.
    #[must_use]
    pub fn vip() -> Self {
        Self {
            token: Some("test-vip-token".to_string()),
            identity: Identity {
                is_vip: true,
                is_admin: false,
            },
        }
    }
}

impl SessionProvider for StaticSession {
    fn token(&self) -> Option<String> {
        self.token.clone()
    }

    fn identity(&self) -> Identity {
        self.identity
    }
}
