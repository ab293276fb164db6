use async_trait::async_trait;

use crate::topic::application::ports::outgoing::TopicResult;

pub const MAX_TITLE_LEN: usize = 100;

//
// ──────────────────────────────────────────────────────────
// Topic Command Validation
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TopicCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title too long")]
    TitleTooLong,

    #[error("Description cannot be empty")]
    EmptyDescription,
}

/// Trims both fields and checks them in the order a user fills the form:
/// title first, then description.
pub(super) fn validate_topic_fields(
    title: &str,
    description: &str,
) -> Result<(String, String), TopicCommandError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(TopicCommandError::EmptyTitle);
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(TopicCommandError::TitleTooLong);
    }

    let description = description.trim();
    if description.is_empty() {
        return Err(TopicCommandError::EmptyDescription);
    }

    Ok((title.to_string(), description.to_string()))
}

//
// ──────────────────────────────────────────────────────────
// Create Topic Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateTopicCommand {
    author: String,
    title: String,
    description: String,
}

impl CreateTopicCommand {
    pub fn new(
        author: String,
        title: String,
        description: String,
    ) -> Result<Self, TopicCommandError> {
        let (title, description) = validate_topic_fields(&title, &description)?;

        Ok(Self {
            author,
            title,
            description,
        })
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTopicError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateTopicUseCase: Send + Sync {
    async fn execute(&self, command: CreateTopicCommand) -> Result<TopicResult, CreateTopicError>;
}
