use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{AuthRequest, AuthResponseDto};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

use cs_core::repositories::UserRepository;
use cs_core::services::auth::{Authenticator, PasswordHasher};
use cs_core::services::password_reset::MailSender;

/// Handler for POST /api/v1/auth/login
///
/// Authenticates user credentials and returns JWT tokens.
///
/// # Request Body
///
/// ```json
/// {
///     "username": "alice",
///     "password": "secret1"
/// }
/// ```
///
/// # Errors
/// - 401 Unauthorized: Invalid credentials
pub async fn login<U, A, H, M>(
    state: web::Data<AppState<U, A, H, M>>,
    request: web::Json<AuthRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    A: Authenticator + 'static,
    H: PasswordHasher + 'static,
    M: MailSender + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .auth_service
        .login(&request.username, &request.password)
        .await
    {
        Ok(response) => HttpResponse::Ok().json(AuthResponseDto::from(response)),
        Err(error) => handle_domain_error(error),
    }
}
