use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::password::ForcePasswordChangeRequest;
use crate::dto::{ErrorResponse, MessageResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use cs_core::errors::AuthError;
use cs_core::repositories::UserRepository;
use cs_core::services::auth::{Authenticator, PasswordHasher};
use cs_core::services::password_reset::MailSender;

/// Handler for POST /api/v1/password/force-change
///
/// Admin-only: sets a new password for any user without requiring the
/// current one.
///
/// # Request Body
///
/// ```json
/// {
///     "username": "string",
///     "new_password": "string"
/// }
/// ```
///
/// # Errors
/// - 400 Bad Request: Unknown user
/// - 401 Unauthorized: Missing or invalid access token
/// - 403 Forbidden: Caller is not an admin
pub async fn force_password_change<U, A, H, M>(
    state: web::Data<AppState<U, A, H, M>>,
    auth: AuthContext,
    request: web::Json<ForcePasswordChangeRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    A: Authenticator + 'static,
    H: PasswordHasher + 'static,
    M: MailSender + 'static,
{
    if !auth.is_admin() {
        return handle_domain_error(AuthError::InsufficientPermissions.into());
    }

    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state.user_service.exists_by_username(&request.username).await {
        Ok(true) => {}
        Ok(false) => {
            return HttpResponse::BadRequest()
                .json(ErrorResponse::new("user_not_found", "User not found"));
        }
        Err(error) => return handle_domain_error(error),
    }

    match state
        .user_service
        .force_change_password(&request.username, &request.new_password)
        .await
    {
        Ok(()) => {
            log::info!(
                "Password force-changed for user {} by {}",
                request.username,
                auth.username
            );
            HttpResponse::Ok().json(MessageResponse::new("Password changed successfully"))
        }
        Err(error) => handle_domain_error(error),
    }
}
