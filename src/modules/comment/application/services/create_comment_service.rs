use async_trait::async_trait;

use crate::comment::application::ports::{
    incoming::use_cases::{CreateCommentCommand, CreateCommentError, CreateCommentUseCase},
    outgoing::{CommentRepository, CommentRepositoryError, CommentResult, CreateCommentData},
};
use crate::topic::application::ports::outgoing::TopicQuery;

#[derive(Debug, Clone)]
pub struct CreateCommentService<TQ, R>
where
    TQ: TopicQuery,
    R: CommentRepository,
{
    topic_query: TQ,
    repository: R,
}

impl<TQ, R> CreateCommentService<TQ, R>
where
    TQ: TopicQuery,
    R: CommentRepository,
{
    pub fn new(topic_query: TQ, repository: R) -> Self {
        Self {
            topic_query,
            repository,
        }
    }
}

#[async_trait]
impl<TQ, R> CreateCommentUseCase for CreateCommentService<TQ, R>
where
    TQ: TopicQuery + Send + Sync,
    R: CommentRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateCommentCommand,
    ) -> Result<CommentResult, CreateCommentError> {
        self.topic_query
            .find_topic(command.topic_id())
            .await
            .map_err(|e| CreateCommentError::RepositoryError(e.to_string()))?
            .ok_or(CreateCommentError::TopicNotFound)?;

        let data = CreateCommentData {
            topic_id: command.topic_id(),
            username: command.username().to_string(),
            content: command.content().to_string(),
        };

        let comment = self
            .repository
            .create_comment(data)
            .await
            .map_err(|e| match e {
                CommentRepositoryError::Validation(msg) => CreateCommentError::Rejected(msg),
                other => CreateCommentError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(
            topic_id = %comment.topic_id,
            comment_id = %comment.id,
            "Comment created"
        );
        Ok(comment)
    }
}
