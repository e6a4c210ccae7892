/**
 * Authentication Middleware
 *
 * This module protects private routes. It reads the token from the
 * `x-auth-token` header, verifies it with the `TokenService` and makes the
 * caller's id available to handlers.
 *
 * Two entry points share one check (`authenticate`):
 * - `auth_middleware` for routers where every route is private
 * - the `AuthUser` extractor for individual handlers
 *
 * Neither touches the document store: identity is a pure function of the
 * token.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::TokenService;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Header carrying the bearer token
pub const AUTH_HEADER: &str = "x-auth-token";

pub const NO_TOKEN_MSG: &str = "Authorization Failed, No token found";
pub const INVALID_TOKEN_MSG: &str = "Token is not valid";

/// Caller identity resolved from a verified token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Verify the token in `headers`
///
/// # Errors
///
/// - `Unauthenticated("Authorization Failed, No token found")` if the header
///   is missing, empty or not valid header text
/// - `Unauthenticated("Token is not valid")` if verification fails
pub fn authenticate(
    headers: &HeaderMap,
    tokens: &TokenService,
) -> Result<AuthenticatedUser, BackendError> {
    let token = headers
        .get(AUTH_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Missing {} header", AUTH_HEADER);
            BackendError::unauthenticated(NO_TOKEN_MSG)
        })?;

    let user_id = tokens.verify(token).map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        BackendError::unauthenticated(INVALID_TOKEN_MSG)
    })?;

    Ok(AuthenticatedUser { user_id })
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the token from the `x-auth-token` header
/// 2. Verifies it
/// 3. Attaches `AuthenticatedUser` to the request extensions
///
/// Returns 401 with a `{msg}` body if the token is missing or invalid.
pub async fn auth_middleware(
    State(tokens): State<TokenService>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let user = authenticate(request.headers(), &tokens)?;
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated caller
///
/// Reuses the identity attached by `auth_middleware` when present, and
/// otherwise authenticates the request itself, so it also works on routes
/// without the middleware.
#[derive(Clone, Copy, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl AuthUser {
    pub fn id(&self) -> Uuid {
        self.0.user_id
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthenticatedUser>() {
            return Ok(AuthUser(*user));
        }

        let user = authenticate(&parts.headers, &state.tokens)?;
        parts.extensions.insert(user);
        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use axum::http::HeaderValue;
    use chrono::{Duration, Utc};

    fn tokens() -> TokenService {
        TokenService::new("middleware-secret", 600)
    }

    #[test]
    fn test_valid_token() {
        let tokens = tokens();
        let user_id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTH_HEADER,
            HeaderValue::from_str(&tokens.issue(user_id).unwrap()).unwrap(),
        );

        let user = authenticate(&headers, &tokens).unwrap();
        assert_eq!(user.user_id, user_id);
    }

    #[test]
    fn test_missing_header() {
        assert_matches!(
            authenticate(&HeaderMap::new(), &tokens()),
            Err(BackendError::Unauthenticated(msg)) if msg == NO_TOKEN_MSG
        );
    }

    #[test]
    fn test_empty_header() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTH_HEADER, HeaderValue::from_static(""));
        assert_matches!(
            authenticate(&headers, &tokens()),
            Err(BackendError::Unauthenticated(msg)) if msg == NO_TOKEN_MSG
        );
    }

    #[test]
    fn test_invalid_token() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTH_HEADER, HeaderValue::from_static("not-a-token"));
        assert_matches!(
            authenticate(&headers, &tokens()),
            Err(BackendError::Unauthenticated(msg)) if msg == INVALID_TOKEN_MSG
        );
    }

    #[test]
    fn test_expired_token() {
        let tokens = tokens();
        let token = tokens
            .issue_at(Uuid::new_v4(), Utc::now() - Duration::seconds(601))
            .unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(AUTH_HEADER, HeaderValue::from_str(&token).unwrap());
        assert_matches!(
            authenticate(&headers, &tokens),
            Err(BackendError::Unauthenticated(msg)) if msg == INVALID_TOKEN_MSG
        );
    }

    #[test]
    fn test_bearer_header_is_ignored() {
        let tokens = tokens();
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", tokens.issue(Uuid::new_v4()).unwrap()))
                .unwrap(),
        );
        assert!(authenticate(&headers, &tokens).is_err());
    }
}
