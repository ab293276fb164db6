use async_trait::async_trait;
use uuid::Uuid;

use crate::comment::application::ports::outgoing::CommentResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCommentsError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Failed to fetch comments: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetCommentsUseCase: Send + Sync {
    async fn execute(&self, topic_id: Uuid) -> Result<Vec<CommentResult>, GetCommentsError>;
}
