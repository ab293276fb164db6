use actix_web::{get, web, Responder};
use uuid::Uuid;

use crate::{
    api::schemas::ErrorResponse,
    comment::application::ports::{
        incoming::use_cases::GetCommentsError, outgoing::CommentResult,
    },
    shared::api::ApiResponse,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/topics/{topic_id}/comments",
    tag = "comments",
    params(("topic_id" = Uuid, Path, description = "Topic id")),
    responses(
        (status = 200, description = "Comments of the topic, oldest first, inside the `data` envelope field", body = [CommentResult]),
        (status = 404, description = "Topic not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/topics/{topic_id}/comments")]
pub async fn get_comments_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data.comment.get_list.execute(path.into_inner()).await {
        Ok(comments) => ApiResponse::success(comments),
        Err(err) => map_get_comments_error(err),
    }
}

fn map_get_comments_error(err: GetCommentsError) -> actix_web::HttpResponse {
    match err {
        GetCommentsError::TopicNotFound => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }
        GetCommentsError::QueryFailed(msg) => {
            tracing::error!("Failed to list comments: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
