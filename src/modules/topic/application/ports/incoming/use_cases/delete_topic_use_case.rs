use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Only the creator can delete this topic")]
    Forbidden,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait DeleteTopicUseCase: Send + Sync {
    async fn execute(&self, requester: &str, topic_id: Uuid) -> Result<(), DeleteTopicError>;
}
