//! Password reset module
//!
//! This module owns the reset-token store and the outbound delivery seam:
//! - Secure reset-token issuance with a fixed one-hour lifetime
//! - Validity checks with symmetric evict-on-read
//! - The `MailSender` trait used to deliver tokens to users

mod mailer;
mod service;

pub use mailer::MailSender;
pub use service::PasswordResetService;
