//! Main token service implementation

use std::sync::Arc;

use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use crate::domain::entities::token::{Claims, TokenPair, JWT_AUDIENCE, JWT_ISSUER};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};

use super::blacklist::TokenBlacklist;
use super::config::TokenServiceConfig;

/// Service issuing and verifying signed session tokens
///
/// Access and refresh tokens are both self-contained HS256 JWTs signed
/// with a single static symmetric secret; there is no key rotation and no
/// key-id claim. A token is valid iff its signature verifies, it has not
/// expired, and it is absent from the blacklist.
pub struct TokenService {
    blacklist: Arc<TokenBlacklist>,
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(blacklist: Arc<TokenBlacklist>, config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.set_audience(&[JWT_AUDIENCE]);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = 0;

        Self {
            blacklist,
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a short-lived access token for the user
    pub fn issue_access_token(&self, user: &User) -> Result<String, DomainError> {
        let claims = Claims::for_user(user, self.config.access_token_expiry_ms);
        self.encode_jwt(&claims)
    }

    /// Issues a long-lived refresh token for the user
    ///
    /// Refresh tokens carry the same claim shape as access tokens; only
    /// the lifetime differs.
    pub fn issue_refresh_token(&self, user: &User) -> Result<String, DomainError> {
        let claims = Claims::for_user(user, self.config.refresh_token_expiry_ms);
        self.encode_jwt(&claims)
    }

    /// Issues a fresh access + refresh token pair
    pub fn issue_token_pair(&self, user: &User) -> Result<TokenPair, DomainError> {
        let access_token = self.issue_access_token(user)?;
        let refresh_token = self.issue_refresh_token(user)?;

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.access_token_expiry_seconds(),
        ))
    }

    /// Encodes claims into a signed HS256 JWT
    fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Parses and signature-verifies a token, returning its claims
    ///
    /// # Returns
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(DomainError)` - Token is expired, malformed, or carries a
    ///   bad signature
    pub fn extract_claims(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => DomainError::Token(TokenError::TokenExpired),
                    ErrorKind::InvalidSignature => DomainError::Token(TokenError::InvalidSignature),
                    _ => DomainError::Token(TokenError::InvalidTokenFormat),
                }
            })?;

        Ok(token_data.claims)
    }

    /// Extracts the subject (username) from a token
    pub fn extract_username(&self, token: &str) -> Result<String, DomainError> {
        Ok(self.extract_claims(token)?.sub)
    }

    /// Checks whether a token is valid for the given user
    ///
    /// True iff the token is not blacklisted, its subject matches the
    /// user's username, and it has not expired. Parse failures of any
    /// kind are swallowed and read as invalid; callers never see raw
    /// decode errors from this path.
    pub fn is_valid(&self, token: &str, user: &User) -> bool {
        if self.blacklist.is_revoked(token) {
            return false;
        }

        match self.extract_claims(token) {
            Ok(claims) => claims.sub == user.username,
            Err(_) => false,
        }
    }

    /// Parses a token and rejects revoked ones
    ///
    /// Used on authenticated requests where no user has been loaded yet;
    /// subject matching against a concrete user happens in
    /// [`is_valid`](Self::is_valid).
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let claims = self.extract_claims(token)?;

        if self.blacklist.is_revoked(token) {
            return Err(DomainError::Token(TokenError::TokenRevoked));
        }

        Ok(claims)
    }

    /// Revokes a token by inserting it into the blacklist
    ///
    /// The entry is kept until the token's own expiry lapses; past that
    /// point an expired blacklist entry already reads as "not revoked",
    /// so nothing more is needed.
    pub fn revoke(&self, token: &str) -> Result<(), DomainError> {
        let claims = self.extract_claims(token)?;
        self.blacklist.revoke(token, claims.expiry_millis());
        Ok(())
    }

    /// Access token lifetime in seconds, as reported to clients
    pub fn access_token_expiry_seconds(&self) -> i64 {
        self.config.access_token_expiry_ms / 1000
    }

    /// The blacklist backing this service
    pub fn blacklist(&self) -> Arc<TokenBlacklist> {
        Arc::clone(&self.blacklist)
    }
}
