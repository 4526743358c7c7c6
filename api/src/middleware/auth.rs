//! JWT authentication middleware for protecting API endpoints.
//!
//! Extracts the bearer token from the Authorization header, verifies it
//! against the token service (signature, expiry, blacklist), and injects
//! an [`AuthContext`] into the request for downstream handlers.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use crate::dto::ErrorResponse;
use cs_core::domain::entities::token::Claims;
use cs_core::services::token::TokenService;

/// User authentication context injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Username extracted from the token subject
    pub username: String,
    /// Role name carried in the token
    pub role: String,
    /// Email carried in the token
    pub email: String,
    /// JWT ID for tracking
    pub jti: String,
}

impl AuthContext {
    /// Creates an authentication context from verified JWT claims
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            username: claims.sub,
            role: claims.role,
            email: claims.email,
            jti: claims.jti,
        }
    }

    /// Whether the authenticated user holds the admin role
    pub fn is_admin(&self) -> bool {
        self.role == "ADMIN"
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    token_service: Arc<TokenService>,
}

impl JwtAuth {
    /// Creates a new JWT authentication middleware
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);

        Box::pin(async move {
            let token = match extract_bearer_token(req.request()) {
                Some(token) => token,
                None => {
                    return Err(unauthorized("Missing or invalid Authorization header"));
                }
            };

            let claims = match token_service.verify(&token) {
                Ok(claims) => claims,
                Err(e) => return Err(unauthorized(&e.to_string())),
            };

            // Inject auth context into request extensions
            req.extensions_mut().insert(AuthContext::from_claims(claims));

            service.call(req).await
        })
    }
}

/// Extracts a Bearer token from the Authorization header
pub fn extract_bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

fn unauthorized(message: &str) -> Error {
    let response =
        HttpResponse::Unauthorized().json(ErrorResponse::new("unauthorized", message));
    InternalError::from_response(message.to_string(), response).into()
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| unauthorized("Authentication required"));

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer_token() {
        use actix_web::test;

        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_http_request();

        assert_eq!(
            extract_bearer_token(&req),
            Some("test_token_123".to_string())
        );

        let req_no_bearer = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_http_request();

        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_no_header = test::TestRequest::default().to_http_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }

    #[test]
    fn test_admin_detection() {
        let context = AuthContext {
            username: "root".to_string(),
            role: "ADMIN".to_string(),
            email: "root@x.com".to_string(),
            jti: "id".to_string(),
        };
        assert!(context.is_admin());

        let context = AuthContext {
            role: "USER".to_string(),
            ..context
        };
        assert!(!context.is_admin());
    }
}
