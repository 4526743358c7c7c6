//! Repository interfaces for entity persistence.

pub mod user;

pub use user::UserRepository;
pub use user::mock::MockUserRepository;
