use async_trait::async_trait;
use uuid::Uuid;

use super::CommentResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CommentQuery: Send + Sync {
    /// Comments of one topic, oldest first.
    async fn list_for_topic(&self, topic_id: Uuid) -> Result<Vec<CommentResult>, CommentQueryError>;

    /// Looks the comment up within its topic so a mismatched path never
    /// reaches another topic's comment.
    async fn find_comment(
        &self,
        topic_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Option<CommentResult>, CommentQueryError>;
}
