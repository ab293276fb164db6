use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use std::fmt;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};

use super::jwt_config::JwtConfig;

pub const ACCESS_TOKEN_TYPE: &str = "access";

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(&self, user_id: Uuid, username: &str) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.access_token_expiry);

        let claims = TokenClaims {
            sub: user_id,
            iss: self.config.issuer.clone(),
            username: username.to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            token_type: ACCESS_TOKEN_TYPE.to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[&self.config.issuer]);

        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: Token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidIssuer => {
                        tracing::warn!("Token verification failed: Unexpected issuer");
                        TokenError::InvalidIssuer
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    _ => {
                        tracing::warn!("Token verification failed: Malformed token");
                        TokenError::MalformedToken
                    }
                }
            })?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(secret: &str, access_token_expiry: i64) -> JwtConfig {
        JwtConfig {
            secret_key: secret.to_string(),
            issuer: "test_issuer".to_string(),
            access_token_expiry,
        }
    }

    fn create_test_jwt_service() -> JwtTokenService {
        JwtTokenService::new(test_config("FAKE_JWT_SECRET_DO_NOT_USE_0123456789", 3600))
    }

    #[test]
    fn test_generate_and_verify_access_token() {
        let service = create_test_jwt_service();
        let user_id = Uuid::new_v4();

        let token = service
            .generate_access_token(user_id, "alice")
            .expect("Token should be generated");

        let claims = service.verify_token(&token).expect("Token should be valid");
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.token_type, ACCESS_TOKEN_TYPE);
        assert_eq!(claims.iss, "test_issuer");
    }

    #[test]
    fn test_token_from_other_issuer_is_rejected() {
        let mut other_config = test_config("FAKE_JWT_SECRET_DO_NOT_USE_0123456789", 3600);
        other_config.issuer = "someone_else".to_string();
        let token = JwtTokenService::new(other_config)
            .generate_access_token(Uuid::new_v4(), "alice")
            .unwrap();

        assert_eq!(
            create_test_jwt_service().verify_token(&token).unwrap_err(),
            TokenError::InvalidIssuer
        );
    }

    #[test]
    fn test_invalid_token_verification() {
        let service = create_test_jwt_service();

        let result = service.verify_token("invalid.jwt.token");

        assert_eq!(result.unwrap_err(), TokenError::MalformedToken);
    }

    #[test]
    fn test_token_with_invalid_json() {
        use base64::{engine::general_purpose, Engine as _};
        let service = create_test_jwt_service();

        let header = general_purpose::URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = general_purpose::URL_SAFE_NO_PAD.encode("not valid json");
        let invalid_token = format!("{}.{}.fakesignature", header, payload);

        assert!(service.verify_token(&invalid_token).is_err());
    }

    #[test]
    fn test_expired_token() {
        // Beyond the 30 second leeway
        let service = JwtTokenService::new(test_config("FAKE_JWT_SECRET_DO_NOT_USE_0123456789", -35));

        let token = service
            .generate_access_token(Uuid::new_v4(), "alice")
            .expect("Token should be generated");

        assert_eq!(
            service.verify_token(&token).unwrap_err(),
            TokenError::TokenExpired
        );
    }

    #[test]
    fn test_invalid_signature() {
        let service = create_test_jwt_service();
        let token = service
            .generate_access_token(Uuid::new_v4(), "alice")
            .unwrap();

        let other = JwtTokenService::new(test_config("ANOTHER_FAKE_SECRET_DO_NOT_USE_98765", 3600));

        assert_eq!(
            other.verify_token(&token).unwrap_err(),
            TokenError::InvalidSignature
        );
    }
}
