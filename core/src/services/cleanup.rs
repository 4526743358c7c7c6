//! Periodic cleanup of the in-memory token stores
//!
//! Lazy eviction keeps reads correct; this task bounds memory by sweeping
//! the blacklist and the reset-token store on a fixed interval. Both
//! paths are deliberate redundancy and are tested independently.

use std::sync::Arc;

use tracing::{info, warn};

use super::password_reset::PasswordResetService;
use super::token::TokenBlacklist;

/// Configuration for the cleanup service
#[derive(Debug, Clone)]
pub struct CleanupConfig {
    /// How often to run a sweep, in milliseconds
    pub interval_ms: u64,
    /// Whether to run the background task at all
    pub enabled: bool,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            interval_ms: 3_600_000, // every hour
            enabled: true,
        }
    }
}

impl CleanupConfig {
    /// Create from environment variables (`TOKEN_CLEANUP_INTERVAL_MS`)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            interval_ms: std::env::var("TOKEN_CLEANUP_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.interval_ms),
            enabled: defaults.enabled,
        }
    }
}

/// Result of one sweep cycle
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepReport {
    /// Expired blacklist entries removed
    pub blacklist_removed: usize,
    /// Expired reset tokens removed
    pub reset_tokens_removed: usize,
}

impl SweepReport {
    /// Total number of entries removed across both stores
    pub fn total_removed(&self) -> usize {
        self.blacklist_removed + self.reset_tokens_removed
    }
}

/// Service sweeping expired entries out of both token stores
///
/// The two stores are swept independently each cycle; one store's outcome
/// never affects the other, and the scheduling loop itself never exits.
pub struct CleanupService {
    blacklist: Arc<TokenBlacklist>,
    reset_tokens: Arc<PasswordResetService>,
    config: CleanupConfig,
}

impl CleanupService {
    /// Create a new cleanup service
    pub fn new(
        blacklist: Arc<TokenBlacklist>,
        reset_tokens: Arc<PasswordResetService>,
        config: CleanupConfig,
    ) -> Self {
        Self {
            blacklist,
            reset_tokens,
            config,
        }
    }

    /// Run a single sweep cycle over both stores
    pub fn run_sweep(&self) -> SweepReport {
        let report = SweepReport {
            blacklist_removed: self.blacklist.sweep(),
            reset_tokens_removed: self.reset_tokens.sweep(),
        };

        if report.total_removed() > 0 {
            info!(
                "Cleanup cycle removed {} blacklist entries and {} reset tokens",
                report.blacklist_removed, report.reset_tokens_removed
            );
        }

        report
    }

    /// Start the cleanup service as a background task
    ///
    /// Spawns a tokio task that sweeps at the configured interval until
    /// the process exits.
    pub fn start_background_task(self: Arc<Self>) {
        if !self.config.enabled {
            warn!("Token cleanup service is disabled");
            return;
        }

        let interval = std::time::Duration::from_millis(self.config.interval_ms);

        tokio::spawn(async move {
            info!(
                "Token cleanup service started - will run every {} ms",
                self.config.interval_ms
            );

            let mut interval_timer = tokio::time::interval(interval);
            // The first tick fires immediately; skip it so startup does
            // not race with store population.
            interval_timer.tick().await;

            loop {
                interval_timer.tick().await;
                self.run_sweep();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn service() -> (
        Arc<TokenBlacklist>,
        Arc<PasswordResetService>,
        CleanupService,
    ) {
        let blacklist = Arc::new(TokenBlacklist::new());
        let reset_tokens = Arc::new(PasswordResetService::new());
        let cleanup = CleanupService::new(
            Arc::clone(&blacklist),
            Arc::clone(&reset_tokens),
            CleanupConfig::default(),
        );
        (blacklist, reset_tokens, cleanup)
    }

    #[test]
    fn test_sweep_on_empty_stores_is_noop() {
        let (_, _, cleanup) = service();
        assert_eq!(cleanup.run_sweep(), SweepReport::default());
    }

    #[test]
    fn test_sweep_covers_both_stores() {
        let (blacklist, reset_tokens, cleanup) = service();

        let now = Utc::now().timestamp_millis();
        blacklist.revoke("stale", now - 1000);
        blacklist.revoke("live", now + 60_000);
        let live_reset = reset_tokens.issue("alice@x.com");

        let report = cleanup.run_sweep();

        assert_eq!(report.blacklist_removed, 1);
        assert_eq!(report.reset_tokens_removed, 0);
        assert!(blacklist.is_revoked("live"));
        assert!(reset_tokens.is_valid(&live_reset));
    }

    #[test]
    fn test_sweep_is_idempotent() {
        let (blacklist, _, cleanup) = service();

        let now = Utc::now().timestamp_millis();
        blacklist.revoke("stale", now - 1000);

        assert_eq!(cleanup.run_sweep().blacklist_removed, 1);
        assert_eq!(cleanup.run_sweep(), SweepReport::default());
    }
}
