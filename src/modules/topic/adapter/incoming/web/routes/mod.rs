mod create_topic;
mod delete_topic;
mod get_topics;
mod update_topic;

pub use create_topic::{__path_create_topic_handler, create_topic_handler, TopicRequest};
pub use delete_topic::{__path_delete_topic_handler, delete_topic_handler};
pub use get_topics::{__path_get_topics_handler, get_topics_handler};
pub use update_topic::{__path_update_topic_handler, update_topic_handler};

use crate::shared::api::ApiResponse;
use crate::topic::application::ports::incoming::use_cases::TopicCommandError;

pub(crate) fn map_command_error(err: TopicCommandError) -> actix_web::HttpResponse {
    match err {
        TopicCommandError::EmptyTitle => {
            ApiResponse::bad_request("EMPTY_TITLE", "Title cannot be empty")
        }
        TopicCommandError::TitleTooLong => {
            ApiResponse::bad_request("TITLE_TOO_LONG", "Title must not exceed 100 characters")
        }
        TopicCommandError::EmptyDescription => {
            ApiResponse::bad_request("EMPTY_DESCRIPTION", "Description cannot be empty")
        }
    }
}
