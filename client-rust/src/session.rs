use crate::ContentScope;

/// Access flags attached to the current session, treated as opaque
/// booleans by this crate. Authorization logic lives with the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity {
    pub is_vip: bool,
    pub is_admin: bool,
}

impl Identity {
    /// Whether this identity may call into the given content scope.
    #[must_use]
    pub fn can_access(self, scope: ContentScope) -> bool {
        match scope {
            ContentScope::Free => true,
            ContentScope::Vip => self.is_vip,
        }
    }
}

/// Source of the current session, injected instead of reading ambient
/// storage so it can be substituted in tests.
pub trait SessionProvider: Send + Sync {
    /// Bearer token for authenticated requests, if a session exists.
    fn token(&self) -> Option<String>;
    fn identity(&self) -> Identity;
}

/// The no-session default: no token, no flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

impl SessionProvider for Anonymous {
    fn token(&self) -> Option<String> {
        None
    }

    fn identity(&self) -> Identity {
        Identity::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_cannot_access_vip_scope() {
        let identity = Anonymous.identity();
        assert!(identity.can_access(ContentScope::Free));
        assert!(!identity.can_access(ContentScope::Vip));
    }
}
