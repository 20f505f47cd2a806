//! Session tokens.
//!
//! Sessions are stateless JWTs: the only payload is the user id and an
//! expiry 24 hours out, signed HS256 with the process-wide secret. Nothing
//! is persisted per session and nothing can be revoked early; a token is
//! trustworthy exactly when its signature checks out and it has not expired.
//!
//! The secret lives inside [`TokenSigner`], which is built once at startup
//! from configuration and passed explicitly to every call site. No code in
//! this module reads the environment.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Token validity window: 24 hours from issuance.
pub const TOKEN_LIFETIME_SECS: i64 = 24 * 60 * 60;

/// JWT claims. The subject is the user id; no other identity data is
/// embedded, so a token reveals nothing if decoded without verification
/// beyond the id itself.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id, stringified.
    pub sub: String,
    /// Expiration (Unix seconds).
    pub exp: u64,
    /// Issued at (Unix seconds).
    pub iat: u64,
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// Issues and verifies session tokens with a fixed symmetric secret.
#[derive(Clone)]
pub struct TokenSigner {
    keys: Arc<Keys>,
}

impl TokenSigner {
    /// Build a signer from the configured secret. Secret length is enforced
    /// at configuration load, before this is reached.
    pub fn new(secret: &str) -> Self {
        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
            }),
        }
    }

    /// Issue a token for `user_id`, valid for [`TOKEN_LIFETIME_SECS`].
    pub fn issue(&self, user_id: i64) -> Result<String, ApiError> {
        self.issue_with_lifetime(user_id, TOKEN_LIFETIME_SECS)
    }

    /// Issue a token with an explicit lifetime in seconds. Negative
    /// lifetimes produce already-expired tokens, which expiry tests rely on.
    pub fn issue_with_lifetime(&self, user_id: i64, lifetime_secs: i64) -> Result<String, ApiError> {
        let now = unix_now();
        let exp = now.saturating_add_signed(lifetime_secs);

        let claims = Claims {
            sub: user_id.to_string(),
            exp,
            iat: now,
        };

        Ok(encode(&Header::default(), &claims, &self.keys.encoding)?)
    }

    /// Verify a token and return the user id it was issued for.
    ///
    /// Malformed tokens, signature mismatches, and expired tokens all
    /// collapse into [`ApiError::InvalidToken`] so the response never leaks
    /// which check failed. Verification is pure; no revocation state exists.
    pub fn verify(&self, token: &str) -> Result<i64, ApiError> {
        let data = decode::<Claims>(token, &self.keys.decoding, &Validation::default())
            .map_err(|_| ApiError::InvalidToken)?;

        data.claims
            .sub
            .parse::<i64>()
            .map_err(|_| ApiError::InvalidToken)
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
