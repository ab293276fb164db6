use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::{
    api::schemas::ErrorResponse,
    auth::adapter::incoming::web::extractors::auth::AuthenticatedUser,
    comment::application::ports::incoming::use_cases::DeleteCommentError,
    shared::api::ApiResponse,
    AppState,
};

#[utoipa::path(
    delete,
    path = "/api/topics/{topic_id}/comments/{comment_id}",
    tag = "comments",
    params(
        ("topic_id" = Uuid, Path, description = "Topic id"),
        ("comment_id" = Uuid, Path, description = "Comment id")
    ),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 403, description = "Caller did not write the comment", body = ErrorResponse),
        (status = 404, description = "Comment not found in this topic", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/topics/{topic_id}/comments/{comment_id}")]
pub async fn delete_comment_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid)>,
) -> impl Responder {
    let (topic_id, comment_id) = path.into_inner();

    match data
        .comment
        .delete
        .execute(&user.username, topic_id, comment_id)
        .await
    {
        Ok(_) => ApiResponse::no_content(),
        Err(err) => map_delete_comment_error(err),
    }
}

fn map_delete_comment_error(err: DeleteCommentError) -> actix_web::HttpResponse {
    match err {
        DeleteCommentError::CommentNotFound => {
            ApiResponse::not_found("COMMENT_NOT_FOUND", "Comment not found")
        }
        DeleteCommentError::Forbidden => {
            ApiResponse::forbidden("FORBIDDEN", "Only the author can delete this comment")
        }
        DeleteCommentError::DatabaseError(msg) => {
            tracing::error!("Failed to delete comment: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
