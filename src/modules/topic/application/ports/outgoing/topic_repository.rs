use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateTopicData {
    pub created_by: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct UpdateTopicData {
    pub title: String,
    pub description: String,
}

/// Topic as stored, returned by both the query and the repository side.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopicResult {
    pub id: Uuid,
    #[schema(example = "Vinyl")]
    pub title: String,
    #[schema(example = "Best pressings?")]
    pub description: String,
    #[schema(example = "alice")]
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Topic not found")]
    TopicNotFound,
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn create_topic(&self, data: CreateTopicData)
        -> Result<TopicResult, TopicRepositoryError>;

    async fn update_topic(
        &self,
        topic_id: Uuid,
        data: UpdateTopicData,
    ) -> Result<TopicResult, TopicRepositoryError>;

    /// Hard delete. Comments go with the topic through the foreign key.
    async fn delete_topic(&self, topic_id: Uuid) -> Result<(), TopicRepositoryError>;
}
