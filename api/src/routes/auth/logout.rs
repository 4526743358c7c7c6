use actix_web::{web, HttpRequest, HttpResponse};

use crate::dto::auth::LogoutResponse;
use crate::handlers::handle_domain_error;
use crate::middleware::auth::extract_bearer_token;
use crate::routes::AppState;

use cs_core::repositories::UserRepository;
use cs_core::services::auth::{Authenticator, PasswordHasher};
use cs_core::services::password_reset::MailSender;

/// Handler for POST /api/v1/auth/logout
///
/// Revokes the presented bearer token. Succeeds even when no
/// Authorization header was supplied; in that case there is simply
/// nothing to revoke.
///
/// # Headers
///
/// ```text
/// Authorization: Bearer {access_token}
/// ```
pub async fn logout<U, A, H, M>(
    req: HttpRequest,
    state: web::Data<AppState<U, A, H, M>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    A: Authenticator + 'static,
    H: PasswordHasher + 'static,
    M: MailSender + 'static,
{
    let token = extract_bearer_token(&req);

    match state.auth_service.logout(token.as_deref()).await {
        Ok(()) => HttpResponse::Ok().json(LogoutResponse {
            message: "Logout successful".to_string(),
        }),
        Err(error) => handle_domain_error(error),
    }
}
