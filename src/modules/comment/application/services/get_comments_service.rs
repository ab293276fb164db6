use async_trait::async_trait;
use uuid::Uuid;

use crate::comment::application::ports::{
    incoming::use_cases::{GetCommentsError, GetCommentsUseCase},
    outgoing::{CommentQuery, CommentResult},
};
use crate::topic::application::ports::outgoing::TopicQuery;

#[derive(Debug, Clone)]
pub struct GetCommentsService<TQ, CQ>
where
    TQ: TopicQuery,
    CQ: CommentQuery,
{
    topic_query: TQ,
    comment_query: CQ,
}

impl<TQ, CQ> GetCommentsService<TQ, CQ>
where
    TQ: TopicQuery,
    CQ: CommentQuery,
{
    pub fn new(topic_query: TQ, comment_query: CQ) -> Self {
        Self {
            topic_query,
            comment_query,
        }
    }
}

#[async_trait]
impl<TQ, CQ> GetCommentsUseCase for GetCommentsService<TQ, CQ>
where
    TQ: TopicQuery + Send + Sync,
    CQ: CommentQuery + Send + Sync,
{
    async fn execute(&self, topic_id: Uuid) -> Result<Vec<CommentResult>, GetCommentsError> {
        self.topic_query
            .find_topic(topic_id)
            .await
            .map_err(|e| GetCommentsError::QueryFailed(e.to_string()))?
            .ok_or(GetCommentsError::TopicNotFound)?;

        self.comment_query
            .list_for_topic(topic_id)
            .await
            .map_err(|e| GetCommentsError::QueryFailed(e.to_string()))
    }
}
