// src/modules/topic/adapter/incoming/web/routes/delete_topic.rs
use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::{
    api::schemas::ErrorResponse,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::DeleteTopicError,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    delete,
    path = "/api/topics/{topic_id}",
    tag = "topics",
    params(("topic_id" = Uuid, Path, description = "Topic id")),
    responses(
        (status = 204, description = "Topic and its comments deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 403, description = "Caller did not create the topic", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/topics/{topic_id}")]
pub async fn delete_topic_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data.topic.delete.execute(&user.username, topic_id).await {
        Ok(_) => ApiResponse::no_content(),
        Err(err) => map_delete_topic_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_delete_topic_error(err: DeleteTopicError) -> actix_web::HttpResponse {
    match err {
        DeleteTopicError::TopicNotFound => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }
        DeleteTopicError::Forbidden => {
            ApiResponse::forbidden("FORBIDDEN", "Only the creator can delete this topic")
        }
        DeleteTopicError::DatabaseError(msg) => {
            tracing::error!("Failed to delete topic: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
