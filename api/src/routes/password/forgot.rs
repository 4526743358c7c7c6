use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::password::ForgotPasswordRequest;
use crate::dto::MessageResponse;
use crate::handlers::handle_validation_errors;
use crate::routes::AppState;

use cs_core::repositories::UserRepository;
use cs_core::services::auth::{Authenticator, PasswordHasher};
use cs_core::services::password_reset::MailSender;

/// Uniform reply for every forgot-password request
const FORGOT_REPLY: &str = "If the email exists, a reset token has been generated";

/// Handler for POST /api/v1/password/forgot
///
/// Issues a reset token and hands it to the mail sender when the email
/// is known. The response is identical whether or not the email exists,
/// so the endpoint cannot be used to enumerate accounts; the token never
/// appears in the response body.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "alice@example.com"
/// }
/// ```
pub async fn forgot_password<U, A, H, M>(
    state: web::Data<AppState<U, A, H, M>>,
    request: web::Json<ForgotPasswordRequest>,
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

    match state.user_service.exists_by_email(&request.email).await {
        Ok(true) => {
            let token = state.password_reset_service.issue(&request.email);
            state.mailer.send_password_reset(&request.email, &token);
        }
        Ok(false) => {
            log::info!("Password reset requested for unknown email");
        }
        Err(error) => {
            // Lookup failures also get the uniform reply; only the log
            // records what happened.
            log::error!("Forgot-password lookup failed: {:?}", error);
        }
    }

    HttpResponse::Ok().json(MessageResponse::new(FORGOT_REPLY))
}
