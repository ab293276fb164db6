mod create_comment;
mod delete_comment;
mod get_comments;
mod update_comment;

pub use create_comment::{__path_create_comment_handler, create_comment_handler, CreateCommentRequest};
pub use delete_comment::{__path_delete_comment_handler, delete_comment_handler};
pub use get_comments::{__path_get_comments_handler, get_comments_handler};
pub use update_comment::{__path_update_comment_handler, update_comment_handler, UpdateCommentRequest};

use crate::comment::application::ports::incoming::use_cases::CommentCommandError;
use crate::shared::api::ApiResponse;

pub(crate) fn map_command_error(err: CommentCommandError) -> actix_web::HttpResponse {
    match err {
        CommentCommandError::EmptyUsername => {
            ApiResponse::bad_request("EMPTY_USERNAME", "Username cannot be empty")
        }
        CommentCommandError::EmptyContent => {
            ApiResponse::bad_request("EMPTY_CONTENT", "Content cannot be empty")
        }
        CommentCommandError::AuthorMismatch => ApiResponse::forbidden(
            "AUTHOR_MISMATCH",
            "Comments can only be posted as the signed-in user",
        ),
    }
}
