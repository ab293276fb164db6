use base64::{engine::general_purpose, Engine as _};
use serde::Deserialize;
use std::sync::RwLock;

/// Where the signed-in user's bearer token lives between renders.
pub trait TokenStore: Send + Sync {
    fn token(&self) -> Option<String>;
}

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    pub fn set(&self, token: impl Into<String>) {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token.into());
        }
    }

    pub fn clear(&self) {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|slot| slot.clone())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TokenDecodeError {
    #[error("token is not a three-part JWT")]
    NotAJwt,

    #[error("token payload is not base64url: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("token payload is not JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Display fields of a token payload. Nothing here is verified; the server
/// re-checks the signature on every call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenPayload {
    pub id: Option<String>,
    pub username: Option<String>,
}

#[derive(Deserialize)]
struct RawPayload {
    #[serde(default)]
    id: Option<serde_json::Value>,
    #[serde(default)]
    sub: Option<serde_json::Value>,
    #[serde(default)]
    username: Option<String>,
}

fn value_to_string(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Decodes the middle segment of a JWT without checking the signature.
pub fn decode_payload(token: &str) -> Result<TokenPayload, TokenDecodeError> {
    let mut parts = token.split('.');
    let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(payload), Some(_), None) if !payload.is_empty() => payload,
        _ => return Err(TokenDecodeError::NotAJwt),
    };

    let bytes = general_purpose::URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    let raw: RawPayload = serde_json::from_slice(&bytes)?;

    Ok(TokenPayload {
        id: raw.id.or(raw.sub).map(value_to_string),
        username: raw.username,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: Option<String>,
    pub username: String,
}

impl CurrentUser {
    /// A payload only identifies someone when it names a non-empty username.
    pub fn from_payload(payload: TokenPayload) -> Option<Self> {
        let username = payload.username.filter(|u| !u.is_empty())?;
        Some(Self {
            id: payload.id,
            username,
        })
    }
}

/// Identity of the person using the client, resolved once from the token
/// store and handed to whoever needs it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
    user: Option<CurrentUser>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn from_store(store: &dyn TokenStore) -> Self {
        match store.token() {
            Some(token) => Self::from_token(token),
            None => Self::anonymous(),
        }
    }

    /// A token that fails to decode still rides along on requests; it only
    /// yields no display identity.
    pub fn from_token(token: impl Into<String>) -> Self {
        let token = token.into();
        let user = match decode_payload(&token) {
            Ok(payload) => CurrentUser::from_payload(payload),
            Err(e) => {
                tracing::error!("Failed to decode stored token: {}", e);
                None
            }
        };

        Self {
            token: Some(token),
            user,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn current_user(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }
}


#[cfg(test)]
mod tests {
    use super::test_tokens::{token_for, token_with};
    use super::*;
    use uuid::Uuid;

    use crate::auth::adapter::incoming::web::extractors::auth::test_token_provider;

    #[test]
    fn decodes_token_issued_by_server() {
        let user_id = Uuid::new_v4();
        let token = test_token_provider()
            .generate_access_token(user_id, "alice")
            .unwrap();

        let session = Session::from_token(token);

        let user = session.current_user().unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.id.as_deref(), Some(user_id.to_string().as_str()));
    }

    #[test]
    fn id_claim_wins_over_sub() {
        let token = token_with(serde_json::json!({ "id": 42, "sub": "x", "username": "bob" }));

        let payload = decode_payload(&token).unwrap();

        assert_eq!(payload.id.as_deref(), Some("42"));
        assert_eq!(payload.username.as_deref(), Some("bob"));
    }

    #[test]
    fn malformed_token_gives_no_identity_but_keeps_token() {
        let session = Session::from_token("definitely-not-a-jwt");

        assert!(session.current_user().is_none());
        assert_eq!(session.token(), Some("definitely-not-a-jwt"));
    }

    #[test]
    fn payload_that_is_not_json_is_rejected() {
        let token = format!(
            "x.{}.y",
            general_purpose::URL_SAFE_NO_PAD.encode("not json")
        );

        assert!(matches!(
            decode_payload(&token),
            Err(TokenDecodeError::Json(_))
        ));
    }

    #[test]
    fn empty_username_is_not_an_identity() {
        let session = Session::from_token(token_with(serde_json::json!({ "username": "" })));

        assert!(session.current_user().is_none());
    }

    #[test]
    fn session_reads_store_once() {
        let store = MemoryTokenStore::new(token_for("alice"));
        let session = Session::from_store(&store);

        store.set(token_for("mallory"));

        assert_eq!(session.current_user().unwrap().username, "alice");
    }

    #[test]
    fn empty_store_is_anonymous() {
        let store = MemoryTokenStore::default();

        let session = Session::from_store(&store);

        assert!(session.token().is_none());
        assert!(session.current_user().is_none());
    }
}
