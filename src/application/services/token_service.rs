//! Session token issuing and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::entities::{Role, User};
use crate::error::AppError;

/// Claims carried inside a session token.
///
/// `sub` holds the user id as a string per JWT convention; the authentication
/// middleware parses it back into an id before attaching the session to the
/// request.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub email: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

/// Service for signing and verifying JWT session tokens.
///
/// Built once at startup from the configured signing secret and expiry and
/// shared through [`crate::state::AppState`].
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expires_in_minutes: u64,
}

impl TokenService {
    /// Creates a new token service.
    ///
    /// # Arguments
    ///
    /// - `secret` - HS256 signing secret; must match across restarts for
    ///   issued tokens to stay valid
    /// - `expires_in_minutes` - session token lifetime
    pub fn new(secret: &str, expires_in_minutes: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expires_in_minutes,
        }
    }

    /// Signs a session token for a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if encoding fails.
    pub fn sign(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            role: user.role,
            iat: now.timestamp(),
            exp: (now + Duration::minutes(self.expires_in_minutes as i64)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign session token");
            AppError::internal("Failed to issue session token", json!({}))
        })
    }

    /// Verifies a session token and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is malformed, has an
    /// invalid signature, or is expired.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, AppError> {
        decode::<SessionClaims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| {
                AppError::unauthorized(
                    "Unauthorized",
                    json!({"reason": "Invalid or expired session token"}),
                )
            })
    }
}
