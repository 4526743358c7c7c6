//! Outbound mail delivery implementations

mod log_mailer;

pub use log_mailer::LogMailSender;
