use actix_web::{get, web, Responder};

use crate::{
    api::schemas::ErrorResponse,
    shared::api::ApiResponse,
    topic::application::ports::{incoming::use_cases::GetTopicsError, outgoing::TopicResult},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/topics",
    tag = "topics",
    responses(
        (status = 200, description = "All topics, oldest first, inside the `data` envelope field", body = [TopicResult]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/topics")]
pub async fn get_topics_handler(data: web::Data<AppState>) -> impl Responder {
    match data.topic.get_list.execute().await {
        Ok(topics) => ApiResponse::success(topics),
        Err(err) => map_get_topics_error(err),
    }
}

fn map_get_topics_error(err: GetTopicsError) -> actix_web::HttpResponse {
    match err {
        GetTopicsError::QueryFailed(msg) => {
            tracing::error!("Failed to list topics: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
