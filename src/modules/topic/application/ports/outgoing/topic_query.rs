use async_trait::async_trait;
use uuid::Uuid;

use super::TopicResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TopicQuery: Send + Sync {
    /// Every topic, oldest first.
    async fn list_topics(&self) -> Result<Vec<TopicResult>, TopicQueryError>;

    async fn find_topic(&self, topic_id: Uuid) -> Result<Option<TopicResult>, TopicQueryError>;
}
