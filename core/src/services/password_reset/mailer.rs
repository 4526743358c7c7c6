//! Outbound mail delivery seam for the password-reset flow

/// Delivers password-reset tokens to users
///
/// The reset token must never appear in an API response; it leaves the
/// process only through this trait.
pub trait MailSender: Send + Sync {
    /// Deliver a reset token to the given address
    fn send_password_reset(&self, email: &str, token: &str);
}
