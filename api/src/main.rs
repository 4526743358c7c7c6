use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenv::dotenv;
use log::info;

use cs_api::app::create_app;
use cs_api::config::Config;
use cs_api::routes::AppState;

use cs_core::services::auth::AuthService;
use cs_core::services::cleanup::CleanupService;
use cs_core::services::password_reset::PasswordResetService;
use cs_core::services::token::{TokenBlacklist, TokenService, TokenServiceConfig};
use cs_core::services::user::UserService;

use cs_infra::auth::{BcryptPasswordHasher, CredentialsAuthenticator};
use cs_infra::database::{create_pool, MySqlUserRepository};
use cs_infra::mailer::LogMailSender;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Contact Search API Server");

    // Load configuration
    let config = Config::from_env();
    if config.is_production() && config.jwt.is_using_default_secret() {
        panic!("JWT_SECRET must be set in production");
    }

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    // Database and repositories
    let pool = create_pool(&config.database)
        .await
        .map_err(std::io::Error::other)?;
    let user_repository = Arc::new(MySqlUserRepository::new(pool));

    // Stores and services
    let blacklist = Arc::new(TokenBlacklist::new());
    let password_reset_service = Arc::new(PasswordResetService::new());
    let token_service = Arc::new(TokenService::new(
        Arc::clone(&blacklist),
        TokenServiceConfig::from(config.jwt.clone()),
    ));

    let password_hasher = Arc::new(BcryptPasswordHasher::new());
    let authenticator = Arc::new(CredentialsAuthenticator::new(
        Arc::clone(&user_repository),
        Arc::clone(&password_hasher),
    ));
    let mailer = Arc::new(LogMailSender::new());

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repository),
        authenticator,
        Arc::clone(&password_hasher),
        Arc::clone(&token_service),
    ));
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repository),
        Arc::clone(&password_hasher),
    ));

    // Background sweep of expired blacklist entries and reset tokens
    let cleanup_service = Arc::new(CleanupService::new(
        Arc::clone(&blacklist),
        Arc::clone(&password_reset_service),
        config.cleanup.clone(),
    ));
    cleanup_service.start_background_task();

    let app_state = web::Data::new(AppState {
        auth_service,
        user_service,
        token_service,
        password_reset_service,
        mailer,
    });

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
