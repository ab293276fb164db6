use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::map_command_error;
use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    comment::application::ports::{
        incoming::use_cases::{CreateCommentCommand, CreateCommentError},
        outgoing::CommentResult,
    },
    shared::api::ApiResponse,
    AppState,
};

/// `username` is optional; when present it has to match the token's
/// username.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCommentRequest {
    #[serde(default)]
    #[schema(example = "bob")]
    pub username: Option<String>,
    #[serde(default)]
    #[schema(example = "Try Discogs")]
    pub content: String,
}

#[utoipa::path(
    post,
    path = "/api/topics/{topic_id}/comments",
    tag = "comments",
    params(("topic_id" = Uuid, Path, description = "Topic id")),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created", body = inline(SuccessResponse<CommentResult>)),
        (status = 400, description = "Blank content", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 403, description = "Body username differs from the token", body = ErrorResponse),
        (status = 404, description = "Topic not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/topics/{topic_id}/comments")]
pub async fn create_comment_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<CreateCommentRequest>,
) -> impl Responder {
    let CreateCommentRequest { username, content } = payload.into_inner();

    let command = match CreateCommentCommand::new(
        path.into_inner(),
        &user.username,
        username.as_deref(),
        content,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.comment.create.execute(command).await {
        Ok(comment) => ApiResponse::created(comment),
        Err(err) => map_create_comment_error(err),
    }
}

fn map_create_comment_error(err: CreateCommentError) -> actix_web::HttpResponse {
    match err {
        CreateCommentError::TopicNotFound => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }
        CreateCommentError::Rejected(msg) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),
        CreateCommentError::RepositoryError(msg) => {
            tracing::error!("Failed to create comment: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
