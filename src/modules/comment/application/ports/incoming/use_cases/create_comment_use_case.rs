use async_trait::async_trait;
use uuid::Uuid;

use crate::comment::application::ports::outgoing::CommentResult;

//
// ──────────────────────────────────────────────────────────
// Command Validation
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommentCommandError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Content cannot be empty")]
    EmptyContent,

    #[error("Username does not match the signed-in user")]
    AuthorMismatch,
}

/// Content keeps its original whitespace; it only has to carry something
/// besides whitespace.
pub(super) fn validate_content(content: String) -> Result<String, CommentCommandError> {
    if content.trim().is_empty() {
        return Err(CommentCommandError::EmptyContent);
    }
    Ok(content)
}

//
// ──────────────────────────────────────────────────────────
// Create Comment Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateCommentCommand {
    topic_id: Uuid,
    username: String,
    content: String,
}

impl CreateCommentCommand {
    /// `claimed_username` is the `username` field of the request body, if
    /// any. It must agree with the authenticated author.
    pub fn new(
        topic_id: Uuid,
        author: &str,
        claimed_username: Option<&str>,
        content: String,
    ) -> Result<Self, CommentCommandError> {
        let username = author.trim();
        if username.is_empty() {
            return Err(CommentCommandError::EmptyUsername);
        }

        if let Some(claimed) = claimed_username {
            if claimed.trim() != username {
                return Err(CommentCommandError::AuthorMismatch);
            }
        }

        Ok(Self {
            topic_id,
            username: username.to_string(),
            content: validate_content(content)?,
        })
    }

    pub fn topic_id(&self) -> Uuid {
        self.topic_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCommentError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Comment rejected: {0}")]
    Rejected(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateCommentCommand,
    ) -> Result<CommentResult, CreateCommentError>;
}
