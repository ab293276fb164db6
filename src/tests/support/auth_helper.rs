use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::test_token_provider;

/// Authorization header carrying a freshly signed access token for
/// `username`, verifiable by `test_token_provider()`.
pub fn bearer_for(username: &str) -> (&'static str, String) {
    let token = test_token_provider()
        .generate_access_token(Uuid::new_v4(), username)
        .expect("test token should sign");

    ("Authorization", format!("Bearer {token}"))
}
