//! Main authentication service implementation

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::user::{Role, User};
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainResult, TokenError};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

use super::traits::{Authenticator, PasswordHasher};

/// Authentication service coordinating registration, login, refresh and
/// logout
///
/// User lookup and credential verification are delegated to external
/// collaborators; this service owns only the flow between them and the
/// token issuer.
pub struct AuthService<U, A, H>
where
    U: UserRepository,
    A: Authenticator,
    H: PasswordHasher,
{
    /// User repository for account lookups and creation
    user_repository: Arc<U>,
    /// External credential checker used by login
    authenticator: Arc<A>,
    /// Password hasher used by registration
    password_hasher: Arc<H>,
    /// Token service for JWT issuance and revocation
    token_service: Arc<TokenService>,
}

impl<U, A, H> AuthService<U, A, H>
where
    U: UserRepository,
    A: Authenticator,
    H: PasswordHasher,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        authenticator: Arc<A>,
        password_hasher: Arc<H>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            user_repository,
            authenticator,
            password_hasher,
            token_service,
        }
    }

    /// Register a new account
    ///
    /// Fails when the username or the email is already taken. New accounts
    /// always start with the USER role; the password is hashed before it
    /// reaches the repository. A fresh token pair is returned so the
    /// client is logged in immediately.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> DomainResult<AuthResponse> {
        if self.user_repository.exists_by_username(username).await? {
            return Err(AuthError::UsernameAlreadyExists.into());
        }
        if self.user_repository.exists_by_email(email).await? {
            return Err(AuthError::EmailAlreadyExists.into());
        }

        let password_hash = self.password_hasher.hash(password)?;
        let user = User::new(
            username.to_string(),
            email.to_string(),
            password_hash,
            first_name.to_string(),
            last_name.to_string(),
            Role::User,
        );

        let saved = self.user_repository.create(user).await?;
        info!("Registered new user {}", saved.username);

        self.issue_response(&saved)
    }

    /// Authenticate an existing account
    ///
    /// The credential check is delegated to the authenticator; on success
    /// the user is looked up and a fresh token pair issued.
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<AuthResponse> {
        self.authenticator.authenticate(username, password).await?;

        let user = self
            .user_repository
            .find_by_username(username)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        self.issue_response(&user)
    }

    /// Exchange a refresh token for a brand-new token pair
    ///
    /// The presented refresh token is not revoked here; it remains usable
    /// until its natural expiry. See DESIGN.md before changing this to
    /// rotating semantics.
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<AuthResponse> {
        let username = self.token_service.extract_username(refresh_token)?;

        let user = self
            .user_repository
            .find_by_username(&username)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !self.token_service.is_valid(refresh_token, &user) {
            return Err(TokenError::InvalidRefreshToken.into());
        }

        self.issue_response(&user)
    }

    /// Log out by revoking the presented bearer token
    ///
    /// Always succeeds from the caller's perspective: a missing header or
    /// an unparsable token only skips the revocation.
    pub async fn logout(&self, bearer_token: Option<&str>) -> DomainResult<()> {
        if let Some(token) = bearer_token {
            if let Err(e) = self.token_service.revoke(token) {
                debug!("Ignoring revocation failure during logout: {}", e);
            }
        }

        Ok(())
    }

    fn issue_response(&self, user: &User) -> DomainResult<AuthResponse> {
        let pair = self.token_service.issue_token_pair(user)?;
        Ok(AuthResponse::from_token_pair(pair, user))
    }
}
