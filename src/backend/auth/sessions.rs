/**
 * Session Tokens
 *
 * This module issues and verifies the signed bearer tokens handed out at
 * registration and login. Tokens are HS256 JWTs carrying
 * `{ "user": { "id": <uuid> }, "iat": .., "exp": .. }`.
 *
 * Tokens are stateless: there is no session table and no revocation. A
 * token for a deleted user keeps verifying until it expires.
 */

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::shared::AppConfig;

/// Identity claim embedded in every token
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClaimsUser {
    pub id: Uuid,
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user: ClaimsUser,
    /// Issued at (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Token verification failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    #[error("token signature does not match")]
    InvalidSignature,

    #[error("token is malformed")]
    Malformed,

    /// Signing failed; only raised by `issue`
    #[error("failed to sign token: {0}")]
    Signing(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            _ => TokenError::Malformed,
        }
    }
}

/// Issues and verifies tokens with a fixed secret and lifetime
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_secs: u64,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Create a token service
    ///
    /// # Arguments
    ///
    /// * `secret` - HS256 signing secret
    /// * `ttl_secs` - Token lifetime in seconds
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_secs,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.jwt_secret, config.token_ttl_secs)
    }

    /// Issue a token for `user_id`, valid from now for the configured lifetime
    ///
    /// # Errors
    ///
    /// `TokenError::Signing` if the token cannot be encoded or its expiry
    /// does not fit in a timestamp.
    pub fn issue(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issue a token as if it had been created at `issued_at`
    pub fn issue_at(&self, user_id: Uuid, issued_at: DateTime<Utc>) -> Result<String, TokenError> {
        let iat = issued_at.timestamp().max(0) as u64;
        let exp = iat
            .checked_add(self.ttl_secs)
            .ok_or_else(|| TokenError::Signing(format!("ttl {}s overflows exp", self.ttl_secs)))?;
        let claims = Claims {
            user: ClaimsUser { id: user_id },
            iat,
            exp,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify a token and return the embedded user id
    ///
    /// # Errors
    ///
    /// - `TokenError::Expired` if `exp` is in the past
    /// - `TokenError::InvalidSignature` if signed with another secret
    /// - `TokenError::Malformed` for anything that does not decode
    pub fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)?;
        Ok(data.claims.user.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn service() -> TokenService {
        TokenService::new("test-secret", 3600)
    }

    #[test]
    fn test_issue_and_verify() {
        let tokens = service();
        let user_id = Uuid::new_v4();
        let token = tokens.issue(user_id).unwrap();
        assert!(!token.is_empty());
        assert_eq!(tokens.verify(&token), Ok(user_id));
    }

    #[test]
    fn test_overflowing_ttl_is_signing_error() {
        let tokens = TokenService::new("test-secret", u64::MAX);
        assert!(matches!(
            tokens.issue(Uuid::new_v4()),
            Err(TokenError::Signing(_))
        ));
    }

    #[test]
    fn test_expired_token() {
        let tokens = service();
        let issued = Utc::now() - Duration::seconds(3600 + 60);
        let token = tokens.issue_at(Uuid::new_v4(), issued).unwrap();
        assert_eq!(tokens.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_token_still_valid_before_expiry() {
        let tokens = service();
        let user_id = Uuid::new_v4();
        let issued = Utc::now() - Duration::seconds(3600 - 60);
        let token = tokens.issue_at(user_id, issued).unwrap();
        assert_eq!(tokens.verify(&token), Ok(user_id));
    }

    #[test]
    fn test_wrong_secret() {
        let token = service().issue(Uuid::new_v4()).unwrap();
        let other = TokenService::new("another-secret", 3600);
        assert_eq!(other.verify(&token), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_garbage_token() {
        assert_eq!(
            service().verify("invalid.token.here"),
            Err(TokenError::Malformed)
        );
        assert_eq!(service().verify(""), Err(TokenError::Malformed));
    }

    #[test]
    fn test_claims_shape() {
        let tokens = service();
        let user_id = Uuid::new_v4();
        let token = tokens.issue(user_id).unwrap();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        let data = decode::<serde_json::Value>(
            &token,
            &DecodingKey::from_secret(b"unused"),
            &validation,
        )
        .unwrap();

        assert_eq!(data.claims["user"]["id"], user_id.to_string());
        let exp = data.claims["exp"].as_u64().unwrap();
        let iat = data.claims["iat"].as_u64().unwrap();
        assert_eq!(exp - iat, 3600);
    }
}
