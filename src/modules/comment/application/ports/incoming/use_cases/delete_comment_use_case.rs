use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCommentError {
    #[error("Comment not found")]
    CommentNotFound,

    #[error("Only the author can delete this comment")]
    Forbidden,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait DeleteCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        requester: &str,
        topic_id: Uuid,
        comment_id: Uuid,
    ) -> Result<(), DeleteCommentError>;
}
