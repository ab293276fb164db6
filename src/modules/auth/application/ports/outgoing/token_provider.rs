use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token was issued by someone else")]
    InvalidIssuer,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// Structure for JWT Claims
///
/// `username` travels in the payload so clients can show who is signed in
/// without a profile round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,          // User ID
    pub iss: String,        // Issuer, checked on verify
    pub username: String,   // Display name, also the forum author identity
    pub exp: i64,           // Expiration timestamp
    pub iat: i64,           // Issued at timestamp
    pub nbf: i64,           // Not before timestamp
    pub token_type: String, // "access"
}

pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, user_id: Uuid, username: &str) -> Result<String, TokenError>;
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
