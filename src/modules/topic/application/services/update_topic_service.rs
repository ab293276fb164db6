use async_trait::async_trait;

use crate::topic::application::ports::{
    incoming::use_cases::{UpdateTopicCommand, UpdateTopicError, UpdateTopicUseCase},
    outgoing::{TopicQuery, TopicRepository, TopicRepositoryError, TopicResult, UpdateTopicData},
};

#[derive(Debug, Clone)]
pub struct UpdateTopicService<Q, R>
where
    Q: TopicQuery,
    R: TopicRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateTopicService<Q, R>
where
    Q: TopicQuery,
    R: TopicRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateTopicUseCase for UpdateTopicService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateTopicCommand) -> Result<TopicResult, UpdateTopicError> {
        // 1️⃣ Load the topic
        let existing = self
            .query
            .find_topic(command.topic_id())
            .await
            .map_err(|e| UpdateTopicError::RepositoryError(e.to_string()))?
            .ok_or(UpdateTopicError::TopicNotFound)?;

        // 2️⃣ Only the creator edits
        if existing.created_by != command.editor() {
            tracing::warn!(
                topic_id = %existing.id,
                editor = %command.editor(),
                "Rejected topic update from non-creator"
            );
            return Err(UpdateTopicError::Forbidden);
        }

        // 3️⃣ Persist
        let data = UpdateTopicData {
            title: command.title().to_string(),
            description: command.description().to_string(),
        };

        self.repository
            .update_topic(command.topic_id(), data)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicNotFound => UpdateTopicError::TopicNotFound,
                TopicRepositoryError::DatabaseError(msg) => UpdateTopicError::RepositoryError(msg),
            })
    }
}
