use async_trait::async_trait;
use uuid::Uuid;

use crate::comment::application::ports::incoming::use_cases::{
    CreateCommentCommand, CreateCommentError, CreateCommentUseCase, DeleteCommentError,
    DeleteCommentUseCase, GetCommentsError, GetCommentsUseCase, UpdateCommentCommand,
    UpdateCommentError, UpdateCommentUseCase,
};
use crate::comment::application::ports::outgoing::CommentResult;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicCommand, CreateTopicError, CreateTopicUseCase, DeleteTopicError,
    DeleteTopicUseCase, GetTopicsError, GetTopicsUseCase, UpdateTopicCommand, UpdateTopicError,
    UpdateTopicUseCase,
};
use crate::topic::application::ports::outgoing::TopicResult;

// ============================================================
// Topics
// ============================================================

#[derive(Clone)]
pub struct StubGetTopicsUseCase {
    result: Result<Vec<TopicResult>, GetTopicsError>,
}

impl StubGetTopicsUseCase {
    pub fn success(data: Vec<TopicResult>) -> Self {
        Self { result: Ok(data) }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetTopicsError::QueryFailed(msg.into())),
        }
    }
}

#[async_trait]
impl GetTopicsUseCase for StubGetTopicsUseCase {
    async fn execute(&self) -> Result<Vec<TopicResult>, GetTopicsError> {
        self.result.clone()
    }
}

#[derive(Default, Clone)]
pub struct StubCreateTopicUseCase;

#[async_trait]
impl CreateTopicUseCase for StubCreateTopicUseCase {
    async fn execute(&self, _command: CreateTopicCommand) -> Result<TopicResult, CreateTopicError> {
        unimplemented!("StubCreateTopicUseCase not configured for this test")
    }
}

#[derive(Clone)]
pub struct StubUpdateTopicUseCase {
    result: Result<TopicResult, UpdateTopicError>,
}

impl StubUpdateTopicUseCase {
    pub fn success(topic: TopicResult) -> Self {
        Self { result: Ok(topic) }
    }

    pub fn failure(err: UpdateTopicError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl UpdateTopicUseCase for StubUpdateTopicUseCase {
    async fn execute(&self, _command: UpdateTopicCommand) -> Result<TopicResult, UpdateTopicError> {
        self.result.clone()
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteTopicUseCase;

#[async_trait]
impl DeleteTopicUseCase for StubDeleteTopicUseCase {
    async fn execute(&self, _requester: &str, _topic_id: Uuid) -> Result<(), DeleteTopicError> {
        unimplemented!("StubDeleteTopicUseCase not configured for this test")
    }
}

// ============================================================
// Comments
// ============================================================

#[derive(Clone)]
pub struct StubGetCommentsUseCase {
    result: Result<Vec<CommentResult>, GetCommentsError>,
}

impl StubGetCommentsUseCase {
    pub fn success(data: Vec<CommentResult>) -> Self {
        Self { result: Ok(data) }
    }

    pub fn failure(err: GetCommentsError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl GetCommentsUseCase for StubGetCommentsUseCase {
    async fn execute(&self, _topic_id: Uuid) -> Result<Vec<CommentResult>, GetCommentsError> {
        self.result.clone()
    }
}

#[derive(Default, Clone)]
pub struct StubCreateCommentUseCase;

#[async_trait]
impl CreateCommentUseCase for StubCreateCommentUseCase {
    async fn execute(
        &self,
        _command: CreateCommentCommand,
    ) -> Result<CommentResult, CreateCommentError> {
        unimplemented!("StubCreateCommentUseCase not configured for this test")
    }
}

#[derive(Clone)]
pub struct StubUpdateCommentUseCase {
    result: Result<CommentResult, UpdateCommentError>,
}

impl StubUpdateCommentUseCase {
    pub fn success(comment: CommentResult) -> Self {
        Self {
            result: Ok(comment),
        }
    }

    pub fn failure(err: UpdateCommentError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl UpdateCommentUseCase for StubUpdateCommentUseCase {
    async fn execute(
        &self,
        _command: UpdateCommentCommand,
    ) -> Result<CommentResult, UpdateCommentError> {
        self.result.clone()
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteCommentUseCase;

#[async_trait]
impl DeleteCommentUseCase for StubDeleteCommentUseCase {
    async fn execute(
        &self,
        _requester: &str,
        _topic_id: Uuid,
        _comment_id: Uuid,
    ) -> Result<(), DeleteCommentError> {
        unimplemented!("StubDeleteCommentUseCase not configured for this test")
    }
}
