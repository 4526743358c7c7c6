//! Route handlers grouped by API area

pub mod auth;
pub mod password;

use std::sync::Arc;

use cs_core::repositories::UserRepository;
use cs_core::services::auth::{AuthService, Authenticator, PasswordHasher};
use cs_core::services::password_reset::{MailSender, PasswordResetService};
use cs_core::services::token::TokenService;
use cs_core::services::user::UserService;

/// Application state that holds shared services
pub struct AppState<U, A, H, M>
where
    U: UserRepository,
    A: Authenticator,
    H: PasswordHasher,
    M: MailSender,
{
    pub auth_service: Arc<AuthService<U, A, H>>,
    pub user_service: Arc<UserService<U, H>>,
    pub token_service: Arc<TokenService>,
    pub password_reset_service: Arc<PasswordResetService>,
    pub mailer: Arc<M>,
}
