//! Mapping of domain errors to HTTP responses
//!
//! Every handler funnels failures through here so status codes and error
//! codes stay consistent across the surface. Internal detail is logged;
//! the client sees only the variant's user-facing message.

use actix_web::HttpResponse;
use validator::ValidationErrors;

use crate::dto::ErrorResponse;
use cs_core::errors::{AuthError, DomainError, PasswordError, TokenError};

/// Convert a domain error into the appropriate HTTP response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    log::error!("Domain error: {:?}", error);

    match &error {
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::UsernameAlreadyExists => {
                HttpResponse::Conflict().json(ErrorResponse::new("username_exists", auth_error.to_string()))
            }
            AuthError::EmailAlreadyExists => {
                HttpResponse::Conflict().json(ErrorResponse::new("email_exists", auth_error.to_string()))
            }
            AuthError::InvalidCredentials => {
                HttpResponse::Unauthorized().json(ErrorResponse::new("invalid_credentials", auth_error.to_string()))
            }
            AuthError::UserNotFound => {
                HttpResponse::NotFound().json(ErrorResponse::new("user_not_found", auth_error.to_string()))
            }
            AuthError::InvalidCurrentPassword => {
                HttpResponse::BadRequest().json(ErrorResponse::new("invalid_current_password", auth_error.to_string()))
            }
            AuthError::InsufficientPermissions => {
                HttpResponse::Forbidden().json(ErrorResponse::new("insufficient_permissions", auth_error.to_string()))
            }
        },
        DomainError::Token(token_error) => match token_error {
            TokenError::TokenGenerationFailed => HttpResponse::InternalServerError()
                .json(ErrorResponse::new("token_generation_failed", token_error.to_string())),
            _ => HttpResponse::Unauthorized()
                .json(ErrorResponse::new("invalid_token", token_error.to_string())),
        },
        DomainError::Password(password_error) => match password_error {
            PasswordError::InvalidResetToken => HttpResponse::BadRequest()
                .json(ErrorResponse::new("invalid_reset_token", password_error.to_string())),
            PasswordError::ResetFailed => HttpResponse::BadRequest()
                .json(ErrorResponse::new("reset_failed", password_error.to_string())),
        },
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new("validation_error", message.clone()))
        }
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            "not_found",
            format!("Resource not found: {}", resource),
        )),
        DomainError::Database { .. } | DomainError::Internal { .. } => HttpResponse::InternalServerError()
            .json(ErrorResponse::new("internal_error", "An internal error occurred")),
    }
}

/// Convert request-body validation failures into a 400 response
pub fn handle_validation_errors(errors: ValidationErrors) -> HttpResponse {
    let message = errors
        .field_errors()
        .iter()
        .flat_map(|(_, errs)| errs.iter())
        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .collect::<Vec<_>>()
        .join("; ");

    let message = if message.is_empty() {
        "Invalid request body".to_string()
    } else {
        message
    };

    HttpResponse::BadRequest().json(ErrorResponse::new("validation_error", message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_conflict_mapping() {
        let response = handle_domain_error(AuthError::UsernameAlreadyExists.into());
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_token_errors_map_to_unauthorized() {
        let response = handle_domain_error(TokenError::TokenExpired.into());
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = handle_domain_error(TokenError::InvalidRefreshToken.into());
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_reset_token_maps_to_bad_request() {
        let response = handle_domain_error(PasswordError::InvalidResetToken.into());
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_detail_is_not_leaked() {
        let response = handle_domain_error(DomainError::Database {
            message: "connection refused to db-host:3306".to_string(),
        });
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
