//! Unit tests for token service

use std::sync::Arc;

use crate::domain::entities::token::{JWT_AUDIENCE, JWT_ISSUER};
use crate::domain::entities::user::{Role, User};
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenBlacklist, TokenService, TokenServiceConfig};

fn test_config() -> TokenServiceConfig {
    TokenServiceConfig {
        jwt_secret: "test-secret".to_string(),
        access_token_expiry_ms: 86_400_000,
        refresh_token_expiry_ms: 604_800_000,
    }
}

fn test_user() -> User {
    User::new(
        "alice".to_string(),
        "alice@x.com".to_string(),
        "hash".to_string(),
        "Alice".to_string(),
        "Smith".to_string(),
        Role::User,
    )
}

fn service_with(config: TokenServiceConfig) -> TokenService {
    TokenService::new(Arc::new(TokenBlacklist::new()), config)
}

#[test]
fn test_issued_access_token_is_valid() {
    let service = service_with(test_config());
    let user = test_user();

    let token = service.issue_access_token(&user).unwrap();

    assert!(service.is_valid(&token, &user));
}

#[test]
fn test_claims_embedded_on_issuance() {
    let service = service_with(test_config());
    let user = test_user();

    let token = service.issue_access_token(&user).unwrap();
    let claims = service.extract_claims(&token).unwrap();

    assert_eq!(claims.sub, "alice");
    assert_eq!(claims.role, "USER");
    assert_eq!(claims.email, "alice@x.com");
    assert_eq!(claims.first_name, "Alice");
    assert_eq!(claims.last_name, "Smith");
    assert_eq!(claims.iss, JWT_ISSUER);
    assert_eq!(claims.aud, JWT_AUDIENCE);
}

#[test]
fn test_extract_username() {
    let service = service_with(test_config());
    let user = test_user();

    let token = service.issue_refresh_token(&user).unwrap();

    assert_eq!(service.extract_username(&token).unwrap(), "alice");
}

#[test]
fn test_token_pair_lifetimes() {
    let service = service_with(test_config());
    let user = test_user();

    let pair = service.issue_token_pair(&user).unwrap();

    assert_eq!(pair.expires_in, 86_400);
    assert_ne!(pair.access_token, pair.refresh_token);

    let access = service.extract_claims(&pair.access_token).unwrap();
    let refresh = service.extract_claims(&pair.refresh_token).unwrap();
    assert!(refresh.exp > access.exp);
}

#[test]
fn test_revoked_token_is_invalid() {
    let service = service_with(test_config());
    let user = test_user();

    let token = service.issue_access_token(&user).unwrap();
    assert!(service.is_valid(&token, &user));

    service.revoke(&token).unwrap();
    assert!(!service.is_valid(&token, &user));
}

#[test]
fn test_revocation_is_per_token() {
    let service = service_with(test_config());
    let user = test_user();

    let first = service.issue_access_token(&user).unwrap();
    let second = service.issue_access_token(&user).unwrap();

    service.revoke(&first).unwrap();

    assert!(!service.is_valid(&first, &user));
    assert!(service.is_valid(&second, &user));
}

#[test]
fn test_subject_mismatch_is_invalid() {
    let service = service_with(test_config());
    let alice = test_user();
    let bob = User::new(
        "bob".to_string(),
        "bob@x.com".to_string(),
        "hash".to_string(),
        "Bob".to_string(),
        "Jones".to_string(),
        Role::User,
    );

    let token = service.issue_access_token(&alice).unwrap();

    assert!(!service.is_valid(&token, &bob));
}

#[test]
fn test_expired_token_is_invalid() {
    let config = TokenServiceConfig {
        access_token_expiry_ms: -1000,
        ..test_config()
    };
    let service = service_with(config);
    let user = test_user();

    let token = service.issue_access_token(&user).unwrap();

    assert!(!service.is_valid(&token, &user));
    let err = service.extract_claims(&token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::TokenExpired)));
}

#[test]
fn test_garbage_token_never_panics_validity_check() {
    let service = service_with(test_config());
    let user = test_user();

    assert!(!service.is_valid("not-a-jwt", &user));
    assert!(!service.is_valid("", &user));

    let err = service.extract_claims("not-a-jwt").unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::InvalidTokenFormat)
    ));
}

#[test]
fn test_wrong_secret_rejected() {
    let service = service_with(test_config());
    let other = service_with(TokenServiceConfig {
        jwt_secret: "another-secret".to_string(),
        ..test_config()
    });
    let user = test_user();

    let token = other.issue_access_token(&user).unwrap();

    assert!(!service.is_valid(&token, &user));
    let err = service.extract_claims(&token).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::InvalidSignature)
    ));
}

#[test]
fn test_verify_rejects_revoked_token() {
    let service = service_with(test_config());
    let user = test_user();

    let token = service.issue_access_token(&user).unwrap();
    assert!(service.verify(&token).is_ok());

    service.revoke(&token).unwrap();

    let err = service.verify(&token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::TokenRevoked)));
}

#[test]
fn test_revoke_malformed_token_fails() {
    let service = service_with(test_config());

    let err = service.revoke("garbage").unwrap_err();
    assert!(matches!(err, DomainError::Token(_)));
    assert!(service.blacklist().is_empty());
}
