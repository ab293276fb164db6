use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use super::map_command_error;
use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    topic::application::ports::{
        incoming::use_cases::{CreateTopicCommand, CreateTopicError},
        outgoing::TopicResult,
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Body of topic create and update calls. A `createdBy` sent by the client is
/// ignored; the author always comes from the bearer token.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TopicRequest {
    #[serde(default)]
    #[schema(example = "Vinyl")]
    pub title: String,
    #[serde(default)]
    #[schema(example = "Best pressings?")]
    pub description: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/api/topics",
    tag = "topics",
    request_body = TopicRequest,
    responses(
        (status = 201, description = "Topic created", body = inline(SuccessResponse<TopicResult>)),
        (status = 400, description = "Blank title or description", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/topics")]
pub async fn create_topic_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<TopicRequest>,
) -> impl Responder {
    let TopicRequest { title, description } = payload.into_inner();

    // 1️⃣ Build command (validation happens here)
    let command = match CreateTopicCommand::new(user.username, title, description) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    // 2️⃣ Execute use case
    match data.topic.create.execute(command).await {
        Ok(topic) => ApiResponse::created(topic),
        Err(err) => map_create_topic_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_create_topic_error(err: CreateTopicError) -> actix_web::HttpResponse {
    match err {
        CreateTopicError::RepositoryError(msg) => {
            tracing::error!("Failed to create topic: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
