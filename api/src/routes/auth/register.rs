use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{AuthResponseDto, RegisterRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

use cs_core::repositories::UserRepository;
use cs_core::services::auth::{Authenticator, PasswordHasher};
use cs_core::services::password_reset::MailSender;

/// Handler for POST /api/v1/auth/register
///
/// Creates a new user account with the USER role and returns a fresh
/// token pair so the client is logged in immediately.
///
/// # Request Body
///
/// ```json
/// {
///     "username": "alice",
///     "email": "alice@example.com",
///     "password": "secret1",
///     "first_name": "Alice",
///     "last_name": "Smith"
/// }
/// ```
///
/// # Errors
/// - 400 Bad Request: Invalid registration data
/// - 409 Conflict: Username or email already exists
pub async fn register<U, A, H, M>(
    state: web::Data<AppState<U, A, H, M>>,
    request: web::Json<RegisterRequest>,
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
        .register(
            &request.username,
            &request.email,
            &request.password,
            &request.first_name,
            &request.last_name,
        )
        .await
    {
        Ok(response) => HttpResponse::Ok().json(AuthResponseDto::from(response)),
        Err(error) => handle_domain_error(error),
    }
}
