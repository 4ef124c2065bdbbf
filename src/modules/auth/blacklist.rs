//! In-memory token blacklist.
//!
//! Holds the JTIs of tokens revoked before their natural expiry. The set is
//! process-local and never persisted: a revoked entry only matters for the
//! remaining lifetime of its token (at most the configured TTL), and on
//! restart all outstanding tokens are invalidated anyway if the secret
//! rotates. Entries are not pruned; growth is bounded by logout volume
//! within a process lifetime.

use std::collections::HashSet;

use tokio::sync::RwLock;

/// Concurrent set of revoked token identifiers.
///
/// Constructed once at startup and shared through
/// [`crate::state::AppState`]. Reads take a shared lock so concurrent
/// request validation never serializes; writes (logout) are rare.
#[derive(Debug, Default)]
pub struct TokenBlacklist {
    revoked: RwLock<HashSet<String>>,
}

impl TokenBlacklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a JTI to the blacklist. Idempotent: revoking an already-revoked
    /// token is a no-op. Returns `true` if the entry was newly inserted.
    pub async fn revoke(&self, jti: &str) -> bool {
        self.revoked.write().await.insert(jti.to_string())
    }

    /// Whether a JTI has been revoked. Any `revoke` that completed before
    /// this call is observed.
    pub async fn is_revoked(&self, jti: &str) -> bool {
        self.revoked.read().await.contains(jti)
    }

    pub async fn len(&self) -> usize {
        self.revoked.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.revoked.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_revoke_then_is_revoked() {
        let blacklist = TokenBlacklist::new();
        assert!(!blacklist.is_revoked("some-jti").await);

        blacklist.revoke("some-jti").await;
        assert!(blacklist.is_revoked("some-jti").await);
    }

    #[tokio::test]
    async fn test_revoke_is_idempotent() {
        let blacklist = TokenBlacklist::new();
        assert!(blacklist.revoke("jti-1").await);
        assert!(!blacklist.revoke("jti-1").await);
        assert_eq!(blacklist.len().await, 1);
        assert!(blacklist.is_revoked("jti-1").await);
    }

    #[tokio::test]
    async fn test_unrevoked_jti_is_not_revoked() {
        let blacklist = TokenBlacklist::new();
        blacklist.revoke("jti-1").await;
        assert!(!blacklist.is_revoked("jti-2").await);
    }
}
