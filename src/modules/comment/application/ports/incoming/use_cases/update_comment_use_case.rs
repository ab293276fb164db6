use async_trait::async_trait;
use uuid::Uuid;

use super::create_comment_use_case::{validate_content, CommentCommandError};
use crate::comment::application::ports::outgoing::CommentResult;

#[derive(Debug, Clone)]
pub struct UpdateCommentCommand {
    topic_id: Uuid,
    comment_id: Uuid,
    editor: String,
    content: String,
}

impl UpdateCommentCommand {
    pub fn new(
        topic_id: Uuid,
        comment_id: Uuid,
        editor: String,
        content: String,
    ) -> Result<Self, CommentCommandError> {
        Ok(Self {
            topic_id,
            comment_id,
            editor,
            content: validate_content(content)?,
        })
    }

    pub fn topic_id(&self) -> Uuid {
        self.topic_id
    }

    pub fn comment_id(&self) -> Uuid {
        self.comment_id
    }

    pub fn editor(&self) -> &str {
        &self.editor
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateCommentError {
    #[error("Comment not found")]
    CommentNotFound,

    #[error("Only the author can edit this comment")]
    Forbidden,

    #[error("Comment rejected: {0}")]
    Rejected(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateCommentCommand,
    ) -> Result<CommentResult, UpdateCommentError>;
}
