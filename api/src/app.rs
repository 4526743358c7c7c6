//! Application factory
//!
//! Builds the actix-web application with all routes and middleware wired
//! against a prepared [`AppState`].

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware::Logger, web, App, Error, HttpResponse};

use crate::middleware::auth::JwtAuth;
use crate::middleware::cors::create_cors;
use crate::routes::auth::{login, logout, profile, refresh, register};
use crate::routes::password::{change, force_change, forgot, reset, validate};
use crate::routes::AppState;

use cs_core::repositories::UserRepository;
use cs_core::services::auth::{Authenticator, PasswordHasher};
use cs_core::services::password_reset::MailSender;

/// Create and configure the application with all dependencies
pub fn create_app<U, A, H, M>(
    app_state: web::Data<AppState<U, A, H, M>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    A: Authenticator + 'static,
    H: PasswordHasher + 'static,
    M: MailSender + 'static,
{
    let token_service = app_state.token_service.clone();
    let cors = create_cors();

    App::new()
        // Add application state
        .app_data(app_state)
        // Add middleware
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(register::register::<U, A, H, M>))
                        .route("/login", web::post().to(login::login::<U, A, H, M>))
                        .route("/refresh", web::post().to(refresh::refresh::<U, A, H, M>))
                        // Logout reads the Authorization header itself so a
                        // missing header still succeeds.
                        .route("/logout", web::post().to(logout::logout::<U, A, H, M>))
                        .route(
                            "/profile",
                            web::get()
                                .to(profile::profile::<U, A, H, M>)
                                .wrap(JwtAuth::new(token_service.clone())),
                        ),
                )
                .service(
                    web::scope("/password")
                        .route(
                            "/forgot",
                            web::post().to(forgot::forgot_password::<U, A, H, M>),
                        )
                        .route(
                            "/reset",
                            web::post().to(reset::reset_password::<U, A, H, M>),
                        )
                        .route(
                            "/change",
                            web::post()
                                .to(change::change_password::<U, A, H, M>)
                                .wrap(JwtAuth::new(token_service.clone())),
                        )
                        .route(
                            "/force-change",
                            web::post()
                                .to(force_change::force_password_change::<U, A, H, M>)
                                .wrap(JwtAuth::new(token_service.clone())),
                        )
                        .route(
                            "/reset-token/validate",
                            web::get().to(validate::validate_reset_token::<U, A, H, M>),
                        ),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "contact-search-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
