use actix_web::{put, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::map_command_error;
use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    comment::application::ports::{
        incoming::use_cases::{UpdateCommentCommand, UpdateCommentError},
        outgoing::CommentResult,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCommentRequest {
    #[serde(default)]
    #[schema(example = "Try Discogs or a local record shop")]
    pub content: String,
}

#[utoipa::path(
    put,
    path = "/api/topics/{topic_id}/comments/{comment_id}",
    tag = "comments",
    params(
        ("topic_id" = Uuid, Path, description = "Topic id"),
        ("comment_id" = Uuid, Path, description = "Comment id")
    ),
    request_body = UpdateCommentRequest,
    responses(
        (status = 200, description = "Comment updated", body = inline(SuccessResponse<CommentResult>)),
        (status = 400, description = "Blank content", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 403, description = "Caller did not write the comment", body = ErrorResponse),
        (status = 404, description = "Comment not found in this topic", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/topics/{topic_id}/comments/{comment_id}")]
pub async fn update_comment_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid)>,
    payload: web::Json<UpdateCommentRequest>,
) -> impl Responder {
    let (topic_id, comment_id) = path.into_inner();

    let command = match UpdateCommentCommand::new(
        topic_id,
        comment_id,
        user.username,
        payload.into_inner().content,
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.comment.update.execute(command).await {
        Ok(comment) => ApiResponse::success(comment),
        Err(err) => map_update_comment_error(err),
    }
}

fn map_update_comment_error(err: UpdateCommentError) -> actix_web::HttpResponse {
    match err {
        UpdateCommentError::CommentNotFound => {
            ApiResponse::not_found("COMMENT_NOT_FOUND", "Comment not found")
        }
        UpdateCommentError::Forbidden => {
            ApiResponse::forbidden("FORBIDDEN", "Only the author can edit this comment")
        }
        UpdateCommentError::Rejected(msg) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),
        UpdateCommentError::RepositoryError(msg) => {
            tracing::error!("Failed to update comment: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
