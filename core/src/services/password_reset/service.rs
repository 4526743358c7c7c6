//! In-memory password reset token store

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of generated reset tokens
const TOKEN_LENGTH: usize = 32;

/// Reset token lifetime; fixed at one hour, deliberately not configurable
const TOKEN_EXPIRY_HOURS: i64 = 1;

/// A single outstanding reset token
#[derive(Debug, Clone)]
struct ResetEntry {
    email: String,
    expires_at: DateTime<Utc>,
}

/// Thread-safe store of outstanding password-reset tokens
///
/// Keyed by the token string. A valid entry maps exactly one token to
/// exactly one email; several live tokens may exist for the same email at
/// once. Entries are consumed on successful reset, evicted lazily when
/// read after expiry, and swept in bulk by the periodic cleanup task.
pub struct PasswordResetService {
    tokens: DashMap<String, ResetEntry>,
}

impl PasswordResetService {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            tokens: DashMap::new(),
        }
    }

    /// Issue a new reset token for the given email
    ///
    /// The token is 32 characters drawn uniformly from `[A-Za-z0-9]`
    /// using the thread-local CSPRNG, and expires one hour from now.
    pub fn issue(&self, email: &str) -> String {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LENGTH)
            .map(char::from)
            .collect();

        self.tokens.insert(
            token.clone(),
            ResetEntry {
                email: email.to_string(),
                expires_at: Utc::now() + Duration::hours(TOKEN_EXPIRY_HOURS),
            },
        );

        token
    }

    /// Check whether a token is present and unexpired
    ///
    /// An expired entry is removed on the way out (lazy eviction).
    pub fn is_valid(&self, token: &str) -> bool {
        if token.is_empty() {
            return false;
        }

        let now = Utc::now();
        if self
            .tokens
            .remove_if(token, |_, entry| now > entry.expires_at)
            .is_some()
        {
            return false;
        }

        self.tokens.contains_key(token)
    }

    /// The email a token was issued for, if the token is still valid
    ///
    /// Applies the same evict-on-read rule as [`is_valid`](Self::is_valid).
    pub fn email_for(&self, token: &str) -> Option<String> {
        if token.is_empty() {
            return None;
        }

        let now = Utc::now();
        self.tokens
            .remove_if(token, |_, entry| now > entry.expires_at);

        self.tokens.get(token).map(|entry| entry.email.clone())
    }

    /// Remove a token unconditionally; no-op when absent
    pub fn invalidate(&self, token: &str) {
        if token.is_empty() {
            return;
        }
        self.tokens.remove(token);
    }

    /// Remove every entry whose expiry has passed
    ///
    /// # Returns
    /// The number of entries removed
    pub fn sweep(&self) -> usize {
        let now = Utc::now();
        let before = self.tokens.len();
        self.tokens.retain(|_, entry| entry.expires_at >= now);
        before.saturating_sub(self.tokens.len())
    }

    /// Number of outstanding entries (expired-but-unswept included)
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when no entries are outstanding
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[cfg(test)]
    fn expire_now(&self, token: &str) {
        if let Some(mut entry) = self.tokens.get_mut(token) {
            entry.expires_at = Utc::now() - Duration::seconds(1);
        }
    }
}

impl Default for PasswordResetService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issued_token_shape() {
        let store = PasswordResetService::new();
        let token = store.issue("alice@x.com");

        assert_eq!(token.len(), 32);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_issued_token_round_trip() {
        let store = PasswordResetService::new();
        let token = store.issue("alice@x.com");

        assert!(store.is_valid(&token));
        assert_eq!(store.email_for(&token), Some("alice@x.com".to_string()));
    }

    #[test]
    fn test_multiple_tokens_per_email() {
        let store = PasswordResetService::new();
        let first = store.issue("bob@x.com");
        let second = store.issue("bob@x.com");

        assert_ne!(first, second);
        assert!(store.is_valid(&first));
        assert!(store.is_valid(&second));
    }

    #[test]
    fn test_invalidate_round_trip() {
        let store = PasswordResetService::new();
        let token = store.issue("bob@x.com");

        store.invalidate(&token);

        assert!(!store.is_valid(&token));
        assert_eq!(store.email_for(&token), None);
    }

    #[test]
    fn test_invalidate_absent_is_noop() {
        let store = PasswordResetService::new();
        store.invalidate("no-such-token");
        store.invalidate("");
        assert!(store.is_empty());
    }

    #[test]
    fn test_expired_token_evicted_on_is_valid() {
        let store = PasswordResetService::new();
        let token = store.issue("carol@x.com");
        store.expire_now(&token);

        assert!(!store.is_valid(&token));
        assert!(store.is_empty());
    }

    #[test]
    fn test_expired_token_evicted_on_email_for() {
        let store = PasswordResetService::new();
        let token = store.issue("carol@x.com");
        store.expire_now(&token);

        assert_eq!(store.email_for(&token), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_unknown_and_empty_tokens() {
        let store = PasswordResetService::new();
        assert!(!store.is_valid("missing"));
        assert!(!store.is_valid(""));
        assert_eq!(store.email_for(""), None);
    }

    #[test]
    fn test_sweep_removes_only_expired() {
        let store = PasswordResetService::new();
        let stale = store.issue("old@x.com");
        let live = store.issue("new@x.com");
        store.expire_now(&stale);

        assert_eq!(store.sweep(), 1);
        assert!(store.is_valid(&live));
    }

    #[test]
    fn test_sweep_on_empty_and_all_valid_is_noop() {
        let store = PasswordResetService::new();
        assert_eq!(store.sweep(), 0);

        store.issue("live@x.com");
        assert_eq!(store.sweep(), 0);
        assert_eq!(store.len(), 1);
    }
}
