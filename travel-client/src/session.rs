//! Session credential store.

use std::sync::Arc;
use tokio::sync::RwLock;

/// Holder for the current bearer credential.
///
/// This is the single place the login token lives; there are exactly two
/// observable states, authenticated (token present) and anonymous. The store
/// is a cloneable handle, so the gateway and the auth flow share one
/// credential without any ambient global lookup.
///
/// Nothing here validates tokens or touches the network. Clearing the store
/// is an explicit decision of the login/logout flow — a failed request never
/// clears it implicitly.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<String>>>,
}

impl SessionStore {
    /// Create an anonymous store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current token, if authenticated.
    pub async fn get(&self) -> Option<String> {
        let guard = self.inner.read().await;
        guard.clone()
    }

    /// Store a token, replacing any previous one.
    pub async fn set(&self, token: impl Into<String>) {
        let mut guard = self.inner.write().await;
        *guard = Some(token.into());
    }

    /// Drop the token, returning to the anonymous state.
    pub async fn clear(&self) {
        let mut guard = self.inner.write().await;
        *guard = None;
    }

    /// Whether a token is present.
    pub async fn is_authenticated(&self) -> bool {
        let guard = self.inner.read().await;
        guard.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_anonymous() {
        let store = SessionStore::new();
        assert!(store.get().await.is_none());
        assert!(!store.is_authenticated().await);
    }

    #[tokio::test]
    async fn set_then_get() {
        let store = SessionStore::new();
        store.set("tok-1").await;
        assert_eq!(store.get().await.as_deref(), Some("tok-1"));
        assert!(store.is_authenticated().await);
    }

    #[tokio::test]
    async fn set_replaces_previous() {
        let store = SessionStore::new();
        store.set("tok-1").await;
        store.set("tok-2").await;
        assert_eq!(store.get().await.as_deref(), Some("tok-2"));
    }

    #[tokio::test]
    async fn clear_returns_to_anonymous() {
        let store = SessionStore::new();
        store.set("tok-1").await;
        store.clear().await;
        assert!(store.get().await.is_none());
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = SessionStore::new();
        let handle = store.clone();
        handle.set("tok-1").await;
        assert_eq!(store.get().await.as_deref(), Some("tok-1"));
    }
}
