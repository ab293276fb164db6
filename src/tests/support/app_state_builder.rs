use crate::comment::application::comment_use_cases::CommentUseCases;
use crate::comment::application::ports::incoming::use_cases::{
    CreateCommentUseCase, DeleteCommentUseCase, GetCommentsUseCase, UpdateCommentError,
    UpdateCommentUseCase,
};
use crate::tests::support::stubs::*;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, DeleteTopicUseCase, GetTopicsUseCase, UpdateTopicError,
    UpdateTopicUseCase,
};
use crate::topic::application::topic_use_cases::TopicUseCases;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Every use case starts as a stub; tests swap in the one they exercise.
pub struct TestAppStateBuilder {
    topic: TopicUseCases,
    comment: CommentUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            topic: TopicUseCases {
                get_list: Arc::new(StubGetTopicsUseCase::success(vec![])),
                create: Arc::new(StubCreateTopicUseCase),
                update: Arc::new(StubUpdateTopicUseCase::failure(UpdateTopicError::TopicNotFound)),
                delete: Arc::new(StubDeleteTopicUseCase),
            },
            comment: CommentUseCases {
                get_list: Arc::new(StubGetCommentsUseCase::success(vec![])),
                create: Arc::new(StubCreateCommentUseCase),
                update: Arc::new(StubUpdateCommentUseCase::failure(
                    UpdateCommentError::CommentNotFound,
                )),
                delete: Arc::new(StubDeleteCommentUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_topics(mut self, uc: impl GetTopicsUseCase + Send + Sync + 'static) -> Self {
        self.topic.get_list = Arc::new(uc);
        self
    }

    pub fn with_create_topic(
        mut self,
        uc: impl CreateTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.topic.create = Arc::new(uc);
        self
    }

    pub fn with_update_topic(
        mut self,
        uc: impl UpdateTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.topic.update = Arc::new(uc);
        self
    }

    pub fn with_delete_topic(
        mut self,
        uc: impl DeleteTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.topic.delete = Arc::new(uc);
        self
    }

    pub fn with_get_comments(
        mut self,
        uc: impl GetCommentsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.comment.get_list = Arc::new(uc);
        self
    }

    pub fn with_create_comment(
        mut self,
        uc: impl CreateCommentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.comment.create = Arc::new(uc);
        self
    }

    pub fn with_update_comment(
        mut self,
        uc: impl UpdateCommentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.comment.update = Arc::new(uc);
        self
    }

    pub fn with_delete_comment(
        mut self,
        uc: impl DeleteCommentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.comment.delete = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            topic: self.topic,
            comment: self.comment,
        })
    }
}
