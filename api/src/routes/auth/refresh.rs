use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{AuthResponseDto, RefreshTokenRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

use cs_core::repositories::UserRepository;
use cs_core::services::auth::{Authenticator, PasswordHasher};
use cs_core::services::password_reset::MailSender;

/// Handler for POST /api/v1/auth/refresh
///
/// Generates a new access and refresh token pair using a valid refresh
/// token.
///
/// # Request Body
///
/// ```json
/// {
///     "refresh_token": "string"
/// }
/// ```
///
/// # Errors
/// - 401 Unauthorized: Invalid, expired, or revoked refresh token
pub async fn refresh<U, A, H, M>(
    state: web::Data<AppState<U, A, H, M>>,
    request: web::Json<RefreshTokenRequest>,
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

    match state.auth_service.refresh(&request.refresh_token).await {
        Ok(response) => HttpResponse::Ok().json(AuthResponseDto::from(response)),
        Err(error) => handle_domain_error(error),
    }
}
