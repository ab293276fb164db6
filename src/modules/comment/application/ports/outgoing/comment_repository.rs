use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateCommentData {
    pub topic_id: Uuid,
    pub username: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentResult {
    pub id: Uuid,
    pub topic_id: Uuid,
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "Try Discogs")]
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Comment not found")]
    CommentNotFound,

    #[error("Comment rejected: {0}")]
    Validation(String),
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create_comment(
        &self,
        data: CreateCommentData,
    ) -> Result<CommentResult, CommentRepositoryError>;

    async fn update_content(
        &self,
        comment_id: Uuid,
        content: String,
    ) -> Result<CommentResult, CommentRepositoryError>;

    async fn delete_comment(&self, comment_id: Uuid) -> Result<(), CommentRepositoryError>;
}
