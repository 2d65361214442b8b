//! # JWT Token Management
//!
//! Issues and validates HS256-signed bearer tokens carrying a user id.
//!
//! The service is built once from configuration and cloned into request state,
//! so no token operation ever reads process-wide settings.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT Claims structure containing user authentication information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub user_id: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Token errors. Every validation failure maps to an unauthorized response upstream.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    Encode(String),

    #[error("Token has expired")]
    Expired,

    #[error("Invalid token: {0}")]
    Invalid(String),

    #[error("Token subject is missing or malformed")]
    InvalidSubject,
}

/// Signs and validates bearer tokens with a server-held HMAC secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    /// Create a token service from the shared secret and token lifetime in hours.
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl: Duration::hours(ttl_hours),
        }
    }

    /// Issue a token for `user_id`, valid from now for the configured lifetime.
    pub fn issue(&self, user_id: i64) -> Result<String, TokenError> {
        self.issue_at(user_id, lib_utils::now_utc())
    }

    /// Issue a token as if it had been issued at `issued_at`.
    pub fn issue_at(&self, user_id: i64, issued_at: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims {
            user_id,
            iat: lib_utils::unix_seconds(issued_at),
            exp: lib_utils::unix_seconds(issued_at + self.ttl),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Encode(e.to_string()))
    }

    /// Validate a token and return the user id it was issued for.
    pub fn validate(&self, token: &str) -> Result<i64, TokenError> {
        Ok(self.decode(token)?.user_id)
    }

    /// Validate a token and return its full claims.
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::Json(_) => TokenError::InvalidSubject,
                _ => TokenError::Invalid(e.to_string()),
            })?;

        if token_data.claims.user_id <= 0 {
            return Err(TokenError::InvalidSubject);
        }

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("secret", &"[REDACTED]")
            .field("ttl_hours", &self.ttl.num_hours())
            .finish()
    }
}
