// JWT token creation and verification
// Handles authentication tokens with 8-hour expiry

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::id::Id;

/// Error raised when a token fails verification
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid token: {0}")]
    InvalidToken(String),
}

/// JWT claims structure
///
/// # Fields
/// * `sub` - Subject (user id)
/// * `exp` - Expiry time (seconds since epoch)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID (subject)
    pub sub: String,
    /// Expiry timestamp (seconds since epoch)
    pub exp: usize,
}

/// Creates a JWT token for a user
///
/// # Token Properties
/// - Expires after 8 hours
/// - Signed with HS256 algorithm
/// - Contains the user id in the 'sub' claim
pub fn create_token(user_id: &Id, secret: &str) -> Result<String, AuthError> {
    let expiry = Utc::now() + Duration::hours(8);
    let claims = Claims {
        sub: user_id.as_str().to_string(),
        exp: expiry.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| AuthError::InvalidToken(e.to_string()))
}

/// Verifies and decodes a JWT token
///
/// Returns the decoded claims when the token is authentic and unexpired.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AuthError::InvalidToken(e.to_string()))
}

/// Port for bearer-token verification
///
/// The auth middleware depends on this trait rather than on a concrete
/// secret, so tests and deployments inject their own verifier.
pub trait TokenVerifier: Send + Sync {
    /// Verifies a token and returns the authenticated user id
    fn verify(&self, token: &str) -> Result<Id, AuthError>;
}

/// HS256 verifier over a shared secret
pub struct JwtVerifier {
    secret: String,
}

impl JwtVerifier {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl TokenVerifier for JwtVerifier {
    fn verify(&self, token: &str) -> Result<Id, AuthError> {
        let claims = verify_token(token, &self.secret)?;
        Id::parse(claims.sub).map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}
