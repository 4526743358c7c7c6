//! Log-only mail sender for development and testing
//!
//! Writes reset tokens to the log instead of sending email. Deployments
//! with a real mail provider replace this with an SMTP-backed sender.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::info;

use cs_core::services::password_reset::MailSender;

/// Mail sender that logs instead of delivering
#[derive(Clone)]
pub struct LogMailSender {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
}

impl LogMailSender {
    /// Create a new log-only mail sender
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Get the total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

impl Default for LogMailSender {
    fn default() -> Self {
        Self::new()
    }
}

impl MailSender for LogMailSender {
    fn send_password_reset(&self, email: &str, token: &str) {
        self.message_count.fetch_add(1, Ordering::SeqCst);
        // Development-only delivery channel; a real deployment must not
        // log reset tokens.
        info!("Password reset token for {}: {}", email, token);
    }
}
