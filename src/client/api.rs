use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use uuid::Uuid;

use super::config::ClientConfig;
use super::session::Session;
use crate::shared::api::ApiResponse;

//
// ──────────────────────────────────────────────────────────
// Wire Models
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub topic_id: Uuid,
    pub username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Title and description as typed into the topic form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TopicDraft {
    pub title: String,
    pub description: String,
}

#[derive(Serialize)]
struct NewComment<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<&'a str>,
    content: &'a str,
}

#[derive(Serialize)]
struct CommentEdit<'a> {
    content: &'a str,
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, thiserror::Error)]
pub enum ForumApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server answered {status} ({code}): {message}")]
    Status {
        status: u16,
        code: String,
        message: String,
    },

    #[error("could not decode response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait ForumApi: Send + Sync {
    async fn list_topics(&self) -> Result<Vec<Topic>, ForumApiError>;

    async fn create_topic(&self, draft: &TopicDraft) -> Result<Topic, ForumApiError>;

    async fn update_topic(&self, topic_id: Uuid, draft: &TopicDraft)
        -> Result<Topic, ForumApiError>;

    async fn delete_topic(&self, topic_id: Uuid) -> Result<(), ForumApiError>;

    async fn list_comments(&self, topic_id: Uuid) -> Result<Vec<Comment>, ForumApiError>;

    async fn create_comment(
        &self,
        topic_id: Uuid,
        username: Option<&str>,
        content: &str,
    ) -> Result<Comment, ForumApiError>;

    async fn update_comment(
        &self,
        topic_id: Uuid,
        comment_id: Uuid,
        content: &str,
    ) -> Result<Comment, ForumApiError>;

    async fn delete_comment(&self, topic_id: Uuid, comment_id: Uuid)
        -> Result<(), ForumApiError>;
}

//
// ──────────────────────────────────────────────────────────
// HTTP Adapter
// ──────────────────────────────────────────────────────────
//

/// Talks to the forum API over HTTP. Every mutating call carries the
/// session's bearer token; reads go out unauthenticated.
#[derive(Debug, Clone)]
pub struct HttpForumApi {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpForumApi {
    pub fn new(config: &ClientConfig, session: &Session) -> Result<Self, ForumApiError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: session.token().map(str::to_string),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn fetch<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ForumApiError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        decode_envelope(status, &body)
    }

    async fn fetch_empty(request: RequestBuilder) -> Result<(), ForumApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.bytes().await?;
        Err(status_error(status, &body))
    }
}

fn status_error(status: StatusCode, body: &[u8]) -> ForumApiError {
    let (code, message) = serde_json::from_slice::<ApiResponse<serde_json::Value>>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .map(|e| (e.code, e.message))
        .unwrap_or_else(|| {
            (
                "HTTP_ERROR".to_string(),
                status.canonical_reason().unwrap_or("Unexpected status").to_string(),
            )
        });

    ForumApiError::Status {
        status: status.as_u16(),
        code,
        message,
    }
}

/// Turns a status and body into the payload of a `{success, data, error}`
/// envelope.
fn decode_envelope<T: DeserializeOwned>(
    status: StatusCode,
    body: &[u8],
) -> Result<T, ForumApiError> {
    if !status.is_success() {
        return Err(status_error(status, body));
    }

    let envelope: ApiResponse<T> =
        serde_json::from_slice(body).map_err(|e| ForumApiError::Decode(e.to_string()))?;

    envelope.into_data().map_err(|e| ForumApiError::Status {
        status: status.as_u16(),
        code: e.code,
        message: e.message,
    })
}

#[async_trait]
impl ForumApi for HttpForumApi {
    async fn list_topics(&self) -> Result<Vec<Topic>, ForumApiError> {
        Self::fetch(self.client.get(self.url("/api/topics"))).await
    }

    async fn create_topic(&self, draft: &TopicDraft) -> Result<Topic, ForumApiError> {
        let request = self.authorized(self.client.post(self.url("/api/topics")));
        Self::fetch(request.json(draft)).await
    }

    async fn update_topic(
        &self,
        topic_id: Uuid,
        draft: &TopicDraft,
    ) -> Result<Topic, ForumApiError> {
        let request = self.authorized(
            self.client
                .put(self.url(&format!("/api/topics/{topic_id}"))),
        );
        Self::fetch(request.json(draft)).await
    }

    async fn delete_topic(&self, topic_id: Uuid) -> Result<(), ForumApiError> {
        let request = self.authorized(
            self.client
                .delete(self.url(&format!("/api/topics/{topic_id}"))),
        );
        Self::fetch_empty(request).await
    }

    async fn list_comments(&self, topic_id: Uuid) -> Result<Vec<Comment>, ForumApiError> {
        Self::fetch(
            self.client
                .get(self.url(&format!("/api/topics/{topic_id}/comments"))),
        )
        .await
    }

    async fn create_comment(
        &self,
        topic_id: Uuid,
        username: Option<&str>,
        content: &str,
    ) -> Result<Comment, ForumApiError> {
        let request = self.authorized(
            self.client
                .post(self.url(&format!("/api/topics/{topic_id}/comments"))),
        );
        Self::fetch(request.json(&NewComment { username, content })).await
    }

    async fn update_comment(
        &self,
        topic_id: Uuid,
        comment_id: Uuid,
        content: &str,
    ) -> Result<Comment, ForumApiError> {
        let request = self.authorized(self.client.put(
            self.url(&format!("/api/topics/{topic_id}/comments/{comment_id}")),
        ));
        Self::fetch(request.json(&CommentEdit { content })).await
    }

    async fn delete_comment(&self, topic_id: Uuid, comment_id: Uuid) -> Result<(), ForumApiError> {
        let request = self.authorized(self.client.delete(
            self.url(&format!("/api/topics/{topic_id}/comments/{comment_id}")),
        ));
        Self::fetch_empty(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
    use std::net::SocketAddr;

    const TOPIC_JSON: &str = r#"{
        "id": "3f2b8f8e-4d6a-4c1e-9a55-0b8f6e2d9c11",
        "title": "Vinyl",
        "description": "Best pressings?",
        "createdBy": "alice",
        "createdAt": "2026-03-01T10:00:00Z",
        "updatedAt": "2026-03-01T10:00:00Z"
    }"#;

    #[test]
    fn decodes_success_envelope() {
        let body = format!(r#"{{"success":true,"data":{TOPIC_JSON}}}"#);

        let topic: Topic = decode_envelope(StatusCode::CREATED, body.as_bytes()).unwrap();

        assert_eq!(topic.title, "Vinyl");
        assert_eq!(topic.created_by, "alice");
    }

    #[test]
    fn error_envelope_keeps_server_code() {
        let body = br#"{"success":false,"error":{"code":"FORBIDDEN","message":"Only the creator can edit this topic"}}"#;

        let err = decode_envelope::<Topic>(StatusCode::FORBIDDEN, body).unwrap_err();

        match err {
            ForumApiError::Status { status, code, .. } => {
                assert_eq!(status, 403);
                assert_eq!(code, "FORBIDDEN");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_json_error_body_still_reports_status() {
        let err = decode_envelope::<Topic>(StatusCode::BAD_GATEWAY, b"<html>").unwrap_err();

        assert!(matches!(
            err,
            ForumApiError::Status { status: 502, ref code, .. } if code == "HTTP_ERROR"
        ));
    }

    #[test]
    fn garbage_success_body_is_decode_error() {
        let err = decode_envelope::<Vec<Topic>>(StatusCode::OK, b"[1,2").unwrap_err();

        assert!(matches!(err, ForumApiError::Decode(_)));
    }

    /// Comment whose username is the Authorization header the server saw.
    fn echoed_comment(req: &HttpRequest) -> serde_json::Value {
        let auth = req
            .headers()
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        serde_json::json!({
            "id": Uuid::new_v4(),
            "topicId": Uuid::new_v4(),
            "username": auth,
            "content": "echo",
            "createdAt": "2026-03-01T10:00:00Z"
        })
    }

    async fn echo_create(req: HttpRequest) -> HttpResponse {
        HttpResponse::Created().json(serde_json::json!({
            "success": true,
            "data": echoed_comment(&req)
        }))
    }

    async fn echo_list(req: HttpRequest) -> HttpResponse {
        HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "data": [echoed_comment(&req)]
        }))
    }

    /// `web::Json` rejects bodies not sent as `application/json`.
    async fn echo_update(body: web::Json<serde_json::Value>) -> HttpResponse {
        let mut comment = serde_json::json!({
            "id": Uuid::new_v4(),
            "topicId": Uuid::new_v4(),
            "username": "alice",
            "createdAt": "2026-03-01T10:00:00Z"
        });
        comment["content"] = body["content"].clone();

        HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "data": comment
        }))
    }

    async fn start_server() -> SocketAddr {
        let server = HttpServer::new(|| {
            App::new()
                .route("/api/topics/{topic_id}/comments", web::post().to(echo_create))
                .route("/api/topics/{topic_id}/comments", web::get().to(echo_list))
                .route(
                    "/api/topics/{topic_id}/comments/{comment_id}",
                    web::put().to(echo_update),
                )
                .route(
                    "/api/topics/{topic_id}/comments/{comment_id}",
                    web::delete().to(|| async { HttpResponse::NoContent().finish() }),
                )
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();

        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        addr
    }

    fn client_for(addr: SocketAddr, session: &Session) -> HttpForumApi {
        let config = ClientConfig {
            base_url: format!("http://{addr}"),
            ..ClientConfig::default()
        };
        HttpForumApi::new(&config, session).unwrap()
    }

    #[actix_web::test]
    async fn mutating_calls_carry_bearer_token() {
        let addr = start_server().await;
        let api = client_for(addr, &Session::from_token("header.payload.sig"));

        let comment = api
            .create_comment(Uuid::new_v4(), Some("alice"), "hi")
            .await
            .unwrap();

        assert_eq!(comment.username, "Bearer header.payload.sig");
    }

    #[actix_web::test]
    async fn reads_go_out_without_token() {
        let addr = start_server().await;
        let api = client_for(addr, &Session::from_token("header.payload.sig"));

        let comments = api.list_comments(Uuid::new_v4()).await.unwrap();

        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].username, "");
    }

    #[actix_web::test]
    async fn delete_accepts_no_content() {
        let addr = start_server().await;
        let api = client_for(addr, &Session::anonymous());

        api.delete_comment(Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap();
    }

    #[actix_web::test]
    async fn bodies_are_sent_as_json() {
        let addr = start_server().await;
        let api = client_for(addr, &Session::anonymous());

        let comment = api
            .update_comment(Uuid::new_v4(), Uuid::new_v4(), "Try Discogs")
            .await
            .unwrap();

        assert_eq!(comment.content, "Try Discogs");
    }
}
