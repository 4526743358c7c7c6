use actix_web::{web, HttpResponse};

use crate::dto::auth::UserProfileResponse;
use crate::handlers::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use cs_core::repositories::UserRepository;
use cs_core::services::auth::{Authenticator, PasswordHasher};
use cs_core::services::password_reset::MailSender;

/// Handler for GET /api/v1/auth/profile
///
/// Returns the profile of the currently authenticated user. Requires a
/// valid bearer token.
///
/// # Errors
/// - 401 Unauthorized: Missing or invalid access token
/// - 404 Not Found: Token subject no longer exists
pub async fn profile<U, A, H, M>(
    state: web::Data<AppState<U, A, H, M>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    A: Authenticator + 'static,
    H: PasswordHasher + 'static,
    M: MailSender + 'static,
{
    match state.user_service.get_by_username(&auth.username).await {
        Ok(user) => HttpResponse::Ok().json(UserProfileResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}
