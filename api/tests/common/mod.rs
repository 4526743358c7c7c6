//! Shared wiring for HTTP integration tests
//!
//! Builds the full application state against the in-memory repository so
//! tests exercise the real routes, middleware, and services without a
//! database.

use std::sync::Arc;

use actix_web::web;

use cs_api::routes::AppState;
use cs_core::domain::entities::user::{Role, User};
use cs_core::repositories::{MockUserRepository, UserRepository};
use cs_core::services::auth::{AuthService, PasswordHasher};
use cs_core::services::password_reset::PasswordResetService;
use cs_core::services::token::{TokenBlacklist, TokenService, TokenServiceConfig};
use cs_core::services::user::UserService;
use cs_infra::auth::{BcryptPasswordHasher, CredentialsAuthenticator};
use cs_infra::mailer::LogMailSender;

pub type TestAppState = AppState<
    MockUserRepository,
    CredentialsAuthenticator<MockUserRepository, BcryptPasswordHasher>,
    BcryptPasswordHasher,
    LogMailSender,
>;

pub struct TestContext {
    pub state: web::Data<TestAppState>,
    pub repository: Arc<MockUserRepository>,
    pub hasher: Arc<BcryptPasswordHasher>,
    pub mailer: Arc<LogMailSender>,
}

pub fn build_context() -> TestContext {
    let repository = Arc::new(MockUserRepository::new());
    // Low bcrypt cost keeps the tests fast
    let hasher = Arc::new(BcryptPasswordHasher::with_cost(4));
    let blacklist = Arc::new(TokenBlacklist::new());
    let password_reset_service = Arc::new(PasswordResetService::new());
    let mailer = Arc::new(LogMailSender::new());

    let token_service = Arc::new(TokenService::new(
        Arc::clone(&blacklist),
        TokenServiceConfig {
            jwt_secret: "integration-test-secret".to_string(),
            ..TokenServiceConfig::default()
        },
    ));

    let authenticator = Arc::new(CredentialsAuthenticator::new(
        Arc::clone(&repository),
        Arc::clone(&hasher),
    ));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&repository),
        authenticator,
        Arc::clone(&hasher),
        Arc::clone(&token_service),
    ));
    let user_service = Arc::new(UserService::new(
        Arc::clone(&repository),
        Arc::clone(&hasher),
    ));

    let state = web::Data::new(AppState {
        auth_service,
        user_service,
        token_service,
        password_reset_service,
        mailer: Arc::clone(&mailer),
    });

    TestContext {
        state,
        repository,
        hasher,
        mailer,
    }
}

impl TestContext {
    /// Seed a user directly into the repository, bypassing the API
    pub async fn seed_user(&self, username: &str, email: &str, password: &str, role: Role) {
        let hash = self.hasher.hash(password).unwrap();
        self.repository
            .create(User::new(
                username.to_string(),
                email.to_string(),
                hash,
                "Seeded".to_string(),
                "User".to_string(),
                role,
            ))
            .await
            .unwrap();
    }
}

pub fn register_payload(username: &str, email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({
        "username": username,
        "email": email,
        "password": password,
        "first_name": "Test",
        "last_name": "User",
    })
}
