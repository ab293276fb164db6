use async_trait::async_trait;
use uuid::Uuid;

use crate::comment::application::ports::{
    incoming::use_cases::{DeleteCommentError, DeleteCommentUseCase},
    outgoing::{CommentQuery, CommentRepository, CommentRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteCommentService<Q, R>
where
    Q: CommentQuery,
    R: CommentRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeleteCommentService<Q, R>
where
    Q: CommentQuery,
    R: CommentRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DeleteCommentUseCase for DeleteCommentService<Q, R>
where
    Q: CommentQuery + Send + Sync,
    R: CommentRepository + Send + Sync,
{
    async fn execute(
        &self,
        requester: &str,
        topic_id: Uuid,
        comment_id: Uuid,
    ) -> Result<(), DeleteCommentError> {
        let comment = self
            .query
            .find_comment(topic_id, comment_id)
            .await
            .map_err(|e| DeleteCommentError::DatabaseError(e.to_string()))?
            .ok_or(DeleteCommentError::CommentNotFound)?;

        if comment.username != requester {
            return Err(DeleteCommentError::Forbidden);
        }

        self.repository
            .delete_comment(comment_id)
            .await
            .map_err(|e| match e {
                CommentRepositoryError::CommentNotFound => DeleteCommentError::CommentNotFound,
                other => DeleteCommentError::DatabaseError(other.to_string()),
            })?;

        tracing::info!(topic_id = %topic_id, comment_id = %comment_id, "Comment deleted");
        Ok(())
    }
}
