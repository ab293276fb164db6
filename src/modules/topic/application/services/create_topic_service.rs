use async_trait::async_trait;

use crate::topic::application::ports::{
    incoming::use_cases::{CreateTopicCommand, CreateTopicError, CreateTopicUseCase},
    outgoing::{CreateTopicData, TopicRepository, TopicResult},
};

#[derive(Debug, Clone)]
pub struct CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateTopicUseCase for CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, command: CreateTopicCommand) -> Result<TopicResult, CreateTopicError> {
        let data = CreateTopicData {
            created_by: command.author().to_string(),
            title: command.title().to_string(),
            description: command.description().to_string(),
        };

        let topic = self
            .repository
            .create_topic(data)
            .await
            .map_err(|e| CreateTopicError::RepositoryError(e.to_string()))?;

        tracing::info!(topic_id = %topic.id, created_by = %topic.created_by, "Topic created");
        Ok(topic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    use crate::tests::support::fixtures::sample_topic;
    use crate::topic::application::ports::outgoing::{TopicRepositoryError, UpdateTopicData};

    // ──────────────────────────────────────────────────────────
    // Mock Repository
    // ──────────────────────────────────────────────────────────

    #[derive(Clone)]
    struct MockTopicRepository {
        result: Result<TopicResult, TopicRepositoryError>,
        received: Arc<Mutex<Option<CreateTopicData>>>,
    }

    impl MockTopicRepository {
        fn new(result: Result<TopicResult, TopicRepositoryError>) -> Self {
            Self {
                result,
                received: Arc::new(Mutex::new(None)),
            }
        }
    }

    #[async_trait]
    impl TopicRepository for MockTopicRepository {
        async fn create_topic(
            &self,
            data: CreateTopicData,
        ) -> Result<TopicResult, TopicRepositoryError> {
            *self.received.lock().unwrap() = Some(data);
            self.result.clone()
        }

        async fn update_topic(
            &self,
            _topic_id: Uuid,
            _data: UpdateTopicData,
        ) -> Result<TopicResult, TopicRepositoryError> {
            unimplemented!("Not used in create_topic tests")
        }

        async fn delete_topic(&self, _topic_id: Uuid) -> Result<(), TopicRepositoryError> {
            unimplemented!("Not used in create_topic tests")
        }
    }

    // ──────────────────────────────────────────────────────────
    // Tests
    // ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn create_topic_passes_author_and_trimmed_fields() {
        let expected = sample_topic("alice", "Vinyl");
        let repo = MockTopicRepository::new(Ok(expected.clone()));
        let service = CreateTopicService::new(repo.clone());

        let command = CreateTopicCommand::new(
            "alice".to_string(),
            " Vinyl ".to_string(),
            "Best pressings?".to_string(),
        )
        .unwrap();

        let result = service.execute(command).await.unwrap();
        assert_eq!(result, expected);

        let received = repo.received.lock().unwrap().clone().unwrap();
        assert_eq!(received.created_by, "alice");
        assert_eq!(received.title, "Vinyl");
        assert_eq!(received.description, "Best pressings?");
    }

    #[tokio::test]
    async fn create_topic_maps_repository_error() {
        let repo = MockTopicRepository::new(Err(TopicRepositoryError::DatabaseError(
            "db down".to_string(),
        )));
        let service = CreateTopicService::new(repo);

        let command =
            CreateTopicCommand::new("alice".into(), "Vinyl".into(), "desc".into()).unwrap();

        let result = service.execute(command).await;
        assert!(matches!(result, Err(CreateTopicError::RepositoryError(msg)) if msg.contains("db down")));
    }
}
