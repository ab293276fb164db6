mod jwt_config;
mod jwt_service;

pub use jwt_config::{JwtConfig, JwtConfigError};
pub use jwt_service::{JwtTokenService, ACCESS_TOKEN_TYPE};
