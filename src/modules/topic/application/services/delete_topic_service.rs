use async_trait::async_trait;
use uuid::Uuid;

use crate::topic::application::ports::{
    incoming::use_cases::{DeleteTopicError, DeleteTopicUseCase},
    outgoing::{TopicQuery, TopicRepository, TopicRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteTopicService<Q, R>
where
    Q: TopicQuery,
    R: TopicRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeleteTopicService<Q, R>
where
    Q: TopicQuery,
    R: TopicRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DeleteTopicUseCase for DeleteTopicService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, requester: &str, topic_id: Uuid) -> Result<(), DeleteTopicError> {
        // 1️⃣ Load the topic
        let topic = self
            .query
            .find_topic(topic_id)
            .await
            .map_err(|e| DeleteTopicError::DatabaseError(e.to_string()))?
            .ok_or(DeleteTopicError::TopicNotFound)?;

        // 2️⃣ Ensure ownership
        if topic.created_by != requester {
            return Err(DeleteTopicError::Forbidden);
        }

        // 3️⃣ Delete
        self.repository
            .delete_topic(topic_id)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicNotFound => DeleteTopicError::TopicNotFound,
                TopicRepositoryError::DatabaseError(msg) => DeleteTopicError::DatabaseError(msg),
            })?;

        tracing::info!(topic_id = %topic_id, "Topic deleted");
        Ok(())
    }
}
