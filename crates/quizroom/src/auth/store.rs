//! Token storage.
//!
//! The session token pair lives behind the [`TokenStore`] trait, injected
//! into the [`Session`](crate::Session), so callers choose where tokens
//! live: in memory for short-lived sessions, or on disk for sessions that
//! survive restarts.

use std::sync::RwLock;

use super::tokens::{AccessToken, RefreshToken};

/// Persistent storage for the session token pair.
///
/// At most one access token and one refresh token are live per store.
/// Implementations must be safe to share across tasks; the library calls
/// these methods from concurrent request paths without external locking.
pub trait TokenStore: Send + Sync {
    /// Returns the current access token, if any.
    fn access_token(&self) -> Option<AccessToken>;

    /// Replaces the access token. Called after a successful refresh.
    fn set_access_token(&self, token: AccessToken);

    /// Returns the current refresh token, if any.
    fn refresh_token(&self) -> Option<RefreshToken>;

    /// Replaces the whole token pair. Called after a successful sign-in.
    fn set_tokens(&self, access: AccessToken, refresh: Option<RefreshToken>);

    /// Removes both tokens. Called on logout.
    fn clear(&self);
}

/// An in-memory [`TokenStore`].
///
/// Suitable for short-lived sessions and tests. Use a persistent store
/// (for example the CLI's file-backed store) when sessions must survive
/// process restarts.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    state: RwLock<TokenPair>,
}

#[derive(Debug, Default)]
struct TokenPair {
    access: Option<AccessToken>,
    refresh: Option<RefreshToken>,
}

impl MemoryTokenStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn access_token(&self) -> Option<AccessToken> {
        self.state.read().expect("token store lock poisoned").access.clone()
    }

    fn set_access_token(&self, token: AccessToken) {
        self.state.write().expect("token store lock poisoned").access = Some(token);
    }

    fn refresh_token(&self) -> Option<RefreshToken> {
        self.state.read().expect("token store lock poisoned").refresh.clone()
    }

    fn set_tokens(&self, access: AccessToken, refresh: Option<RefreshToken>) {
        let mut state = self.state.write().expect("token store lock poisoned");
        state.access = Some(access);
        state.refresh = refresh;
    }

    fn clear(&self) {
        let mut state = self.state.write().expect("token store lock poisoned");
        state.access = None;
        state.refresh = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let store = MemoryTokenStore::new();
        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
    }

    #[test]
    fn set_tokens_replaces_pair() {
        let store = MemoryTokenStore::new();
        store.set_tokens(
            AccessToken::new("a1"),
            Some(RefreshToken::new("r1")),
        );

        assert_eq!(store.access_token().unwrap().as_str(), "a1");
        assert_eq!(store.refresh_token().unwrap().as_str(), "r1");
    }

    #[test]
    fn set_access_token_keeps_refresh_token() {
        let store = MemoryTokenStore::new();
        store.set_tokens(AccessToken::new("a1"), Some(RefreshToken::new("r1")));
        store.set_access_token(AccessToken::new("a2"));

        assert_eq!(store.access_token().unwrap().as_str(), "a2");
        assert_eq!(store.refresh_token().unwrap().as_str(), "r1");
    }

    #[test]
    fn clear_removes_both() {
        let store = MemoryTokenStore::new();
        store.set_tokens(AccessToken::new("a1"), Some(RefreshToken::new("r1")));
        store.clear();

        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
    }
}
