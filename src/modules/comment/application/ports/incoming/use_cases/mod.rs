mod create_comment_use_case;
mod delete_comment_use_case;
mod get_comments_use_case;
mod update_comment_use_case;

pub use create_comment_use_case::{
    CommentCommandError, CreateCommentCommand, CreateCommentError, CreateCommentUseCase,
};
pub use delete_comment_use_case::{DeleteCommentError, DeleteCommentUseCase};
pub use get_comments_use_case::{GetCommentsError, GetCommentsUseCase};
pub use update_comment_use_case::{
    UpdateCommentCommand, UpdateCommentError, UpdateCommentUseCase,
};
