use async_trait::async_trait;
use uuid::Uuid;

use super::create_topic_use_case::{validate_topic_fields, TopicCommandError};
use crate::topic::application::ports::outgoing::TopicResult;

#[derive(Debug, Clone)]
pub struct UpdateTopicCommand {
    topic_id: Uuid,
    editor: String,
    title: String,
    description: String,
}

impl UpdateTopicCommand {
    pub fn new(
        topic_id: Uuid,
        editor: String,
        title: String,
        description: String,
    ) -> Result<Self, TopicCommandError> {
        let (title, description) = validate_topic_fields(&title, &description)?;

        Ok(Self {
            topic_id,
            editor,
            title,
            description,
        })
    }

    pub fn topic_id(&self) -> Uuid {
        self.topic_id
    }

    pub fn editor(&self) -> &str {
        &self.editor
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Only the creator can edit this topic")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateTopicUseCase: Send + Sync {
    async fn execute(&self, command: UpdateTopicCommand) -> Result<TopicResult, UpdateTopicError>;
}
