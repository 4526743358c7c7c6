use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::password::ResetPasswordRequest;
use crate::dto::MessageResponse;
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

use cs_core::errors::PasswordError;
use cs_core::repositories::UserRepository;
use cs_core::services::auth::{Authenticator, PasswordHasher};
use cs_core::services::password_reset::MailSender;

/// Handler for POST /api/v1/password/reset
///
/// Resets a password using a previously issued reset token. The token is
/// consumed on success. Every validation failure maps to the same
/// generic "Invalid or expired reset token" error so the caller cannot
/// tell which step rejected the request.
///
/// # Request Body
///
/// ```json
/// {
///     "reset_token": "string",
///     "new_password": "string"
/// }
/// ```
pub async fn reset_password<U, A, H, M>(
    state: web::Data<AppState<U, A, H, M>>,
    request: web::Json<ResetPasswordRequest>,
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

    if !state.password_reset_service.is_valid(&request.reset_token) {
        return handle_domain_error(PasswordError::InvalidResetToken.into());
    }

    let email = match state.password_reset_service.email_for(&request.reset_token) {
        Some(email) => email,
        None => return handle_domain_error(PasswordError::InvalidResetToken.into()),
    };

    if let Err(error) = state
        .user_service
        .reset_password(&email, &request.new_password)
        .await
    {
        log::error!("Password reset failed: {:?}", error);
        return handle_domain_error(PasswordError::ResetFailed.into());
    }

    // Consume the token only after the password was actually updated
    state.password_reset_service.invalidate(&request.reset_token);

    HttpResponse::Ok().json(MessageResponse::new("Password reset successfully"))
}
