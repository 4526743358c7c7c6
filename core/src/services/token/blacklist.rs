//! In-memory token revocation store
//!
//! Maps the full token string to its expiry in epoch milliseconds. Absence
//! from the store means "not revoked"; revocation is a positive assertion.
//! Entries are evicted lazily when read after expiry, and in bulk by the
//! periodic cleanup task.

use chrono::Utc;
use dashmap::DashMap;

/// Thread-safe blacklist of revoked tokens
///
/// All operations are per-key atomic; a read-then-delete on one entry can
/// never race a concurrent insert of the same key into a lost update.
pub struct TokenBlacklist {
    entries: DashMap<String, i64>,
}

impl TokenBlacklist {
    /// Create a new empty blacklist
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Add a token to the blacklist until `expiry_millis`
    ///
    /// No-op for blank tokens. Re-revoking an already revoked token
    /// overwrites the stored expiry (last write wins).
    pub fn revoke(&self, token: &str, expiry_millis: i64) {
        if token.trim().is_empty() {
            return;
        }
        self.entries.insert(token.to_string(), expiry_millis);
    }

    /// Check whether a token is currently revoked
    ///
    /// A blacklist entry whose own expiry has passed reads as "not
    /// revoked" and is removed on the way out (lazy eviction).
    pub fn is_revoked(&self, token: &str) -> bool {
        if token.trim().is_empty() {
            return false;
        }

        let now = Utc::now().timestamp_millis();
        if self
            .entries
            .remove_if(token, |_, expiry| now > *expiry)
            .is_some()
        {
            return false;
        }

        self.entries.contains_key(token)
    }

    /// Remove every entry whose expiry has passed
    ///
    /// # Returns
    /// The number of entries removed
    pub fn sweep(&self) -> usize {
        let now = Utc::now().timestamp_millis();
        let before = self.entries.len();
        self.entries.retain(|_, expiry| *expiry >= now);
        before.saturating_sub(self.entries.len())
    }

    /// Number of live entries (expired-but-unswept entries included)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the blacklist holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TokenBlacklist {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn future_millis(offset_ms: i64) -> i64 {
        Utc::now().timestamp_millis() + offset_ms
    }

    #[test]
    fn test_revoke_and_check() {
        let blacklist = TokenBlacklist::new();
        blacklist.revoke("token-a", future_millis(60_000));

        assert!(blacklist.is_revoked("token-a"));
        assert!(!blacklist.is_revoked("token-b"));
    }

    #[test]
    fn test_blank_token_is_noop() {
        let blacklist = TokenBlacklist::new();
        blacklist.revoke("", future_millis(60_000));
        blacklist.revoke("   ", future_millis(60_000));

        assert!(blacklist.is_empty());
        assert!(!blacklist.is_revoked(""));
    }

    #[test]
    fn test_expired_entry_reads_false_and_is_evicted() {
        let blacklist = TokenBlacklist::new();
        blacklist.revoke("stale", future_millis(-1000));

        assert!(!blacklist.is_revoked("stale"));
        // Entry was removed lazily; a second check is also false and has
        // no further side effects.
        assert!(!blacklist.is_revoked("stale"));
        assert!(blacklist.is_empty());
    }

    #[test]
    fn test_last_write_wins() {
        let blacklist = TokenBlacklist::new();
        blacklist.revoke("token", future_millis(-1000));
        blacklist.revoke("token", future_millis(60_000));

        assert!(blacklist.is_revoked("token"));
    }

    #[test]
    fn test_sweep_removes_only_expired() {
        let blacklist = TokenBlacklist::new();
        blacklist.revoke("old-1", future_millis(-5000));
        blacklist.revoke("old-2", future_millis(-1));
        blacklist.revoke("live", future_millis(60_000));

        assert_eq!(blacklist.sweep(), 2);
        assert_eq!(blacklist.len(), 1);
        assert!(blacklist.is_revoked("live"));
    }

    #[test]
    fn test_sweep_on_empty_and_all_valid_is_noop() {
        let blacklist = TokenBlacklist::new();
        assert_eq!(blacklist.sweep(), 0);

        blacklist.revoke("live", future_millis(60_000));
        assert_eq!(blacklist.sweep(), 0);
        assert_eq!(blacklist.len(), 1);
    }
}
