use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::comment::adapter::incoming::web::routes::{CreateCommentRequest, UpdateCommentRequest};
use crate::comment::application::ports::outgoing::CommentResult;
use crate::topic::adapter::incoming::web::routes::TopicRequest;
use crate::topic::application::ports::outgoing::TopicResult;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Music Fan Zone Forum API",
        version = "1.0.0",
        description = "Topics and comments of the Music Fan Zone discussion forum"
    ),
    paths(
        // Topic endpoints
        crate::topic::adapter::incoming::web::routes::get_topics_handler,
        crate::topic::adapter::incoming::web::routes::create_topic_handler,
        crate::topic::adapter::incoming::web::routes::update_topic_handler,
        crate::topic::adapter::incoming::web::routes::delete_topic_handler,

        // Comment endpoints
        crate::comment::adapter::incoming::web::routes::get_comments_handler,
        crate::comment::adapter::incoming::web::routes::create_comment_handler,
        crate::comment::adapter::incoming::web::routes::update_comment_handler,
        crate::comment::adapter::incoming::web::routes::delete_comment_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            TopicRequest,
            TopicResult,
            CreateCommentRequest,
            UpdateCommentRequest,
            CommentResult
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "topics", description = "Forum topics"),
        (name = "comments", description = "Comments under a topic"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token of the signed-in user"))
                        .build(),
                ),
            )
        }
    }
}
