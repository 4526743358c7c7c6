use actix_web::{web, HttpResponse};

use crate::dto::password::{ValidateResetTokenQuery, ValidateResetTokenResponse};
use crate::routes::AppState;

use cs_core::repositories::UserRepository;
use cs_core::services::auth::{Authenticator, PasswordHasher};
use cs_core::services::password_reset::MailSender;

/// Handler for GET /api/v1/password/reset-token/validate?token=...
///
/// Reports whether a reset token is currently valid without consuming it.
pub async fn validate_reset_token<U, A, H, M>(
    state: web::Data<AppState<U, A, H, M>>,
    query: web::Query<ValidateResetTokenQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    A: Authenticator + 'static,
    H: PasswordHasher + 'static,
    M: MailSender + 'static,
{
    let valid = state.password_reset_service.is_valid(&query.token);

    let message = if valid {
        "Token is valid"
    } else {
        "Token is invalid or expired"
    };

    HttpResponse::Ok().json(ValidateResetTokenResponse {
        valid,
        message: message.to_string(),
    })
}
