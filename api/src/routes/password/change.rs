use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::password::ChangePasswordRequest;
use crate::dto::MessageResponse;
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use cs_core::repositories::UserRepository;
use cs_core::services::auth::{Authenticator, PasswordHasher};
use cs_core::services::password_reset::MailSender;

/// Handler for POST /api/v1/password/change
///
/// Changes the authenticated user's password. The current password must
/// match before the new one is accepted.
///
/// # Request Body
///
/// ```json
/// {
///     "current_password": "string",
///     "new_password": "string"
/// }
/// ```
///
/// # Errors
/// - 400 Bad Request: Current password is incorrect
/// - 401 Unauthorized: Missing or invalid access token
pub async fn change_password<U, A, H, M>(
    state: web::Data<AppState<U, A, H, M>>,
    auth: AuthContext,
    request: web::Json<ChangePasswordRequest>,
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
        .user_service
        .change_password(&auth.username, &request.current_password, &request.new_password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Password changed successfully")),
        Err(error) => handle_domain_error(error),
    }
}
