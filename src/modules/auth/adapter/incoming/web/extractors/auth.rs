use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::ACCESS_TOKEN_TYPE;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// Caller identity resolved from a verified bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub username: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let jwt_service =
            match req.app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(service) => service,
                None => {
                    tracing::error!("Token provider is not registered as app data");
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        match jwt_service.verify_token(&token) {
            Ok(claims) => {
                if claims.token_type != ACCESS_TOKEN_TYPE {
                    return ready(Err(create_api_error(ApiResponse::unauthorized(
                        "INVALID_TOKEN_TYPE",
                        "Invalid token type",
                    ))));
                }

                ready(Ok(AuthenticatedUser {
                    user_id: claims.sub,
                    username: claims.username,
                }))
            }
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Shared by route tests: wires a real HS256 service so tokens go through
/// the same verification path as production.
#[cfg(test)]
pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};

    Arc::new(JwtTokenService::new(JwtConfig {
        secret_key: "FAKE_JWT_SECRET_DO_NOT_USE_0123456789".to_string(),
        issuer: "test_issuer".to_string(),
        access_token_expiry: 3600,
    }))
}
