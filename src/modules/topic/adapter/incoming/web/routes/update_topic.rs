use actix_web::{put, web, Responder};
use uuid::Uuid;

use super::{map_command_error, TopicRequest};
use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    shared::api::ApiResponse,
    topic::application::ports::{
        incoming::use_cases::{UpdateTopicCommand, UpdateTopicError},
        outgoing::TopicResult,
    },
    AppState,
};

#[utoipa::path(
    put,
    path = "/api/topics/{topic_id}",
    tag = "topics",
    params(("topic_id" = Uuid, Path, description = "Topic id")),
    request_body = TopicRequest,
    responses(
        (status = 200, description = "Topic updated", body = inline(SuccessResponse<TopicResult>)),
        (status = 400, description = "Blank title or description", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 403, description = "Caller did not create the topic", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/topics/{topic_id}")]
pub async fn update_topic_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<TopicRequest>,
) -> impl Responder {
    let topic_id = path.into_inner();
    let TopicRequest { title, description } = payload.into_inner();

    let command = match UpdateTopicCommand::new(topic_id, user.username, title, description) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.topic.update.execute(command).await {
        Ok(topic) => ApiResponse::success(topic),
        Err(err) => map_update_topic_error(err),
    }
}

fn map_update_topic_error(err: UpdateTopicError) -> actix_web::HttpResponse {
    match err {
        UpdateTopicError::TopicNotFound => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }
        UpdateTopicError::Forbidden => {
            ApiResponse::forbidden("FORBIDDEN", "Only the creator can edit this topic")
        }
        UpdateTopicError::RepositoryError(msg) => {
            tracing::error!("Failed to update topic: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
