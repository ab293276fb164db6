use async_trait::async_trait;

use crate::comment::application::ports::{
    incoming::use_cases::{UpdateCommentCommand, UpdateCommentError, UpdateCommentUseCase},
    outgoing::{CommentQuery, CommentRepository, CommentRepositoryError, CommentResult},
};

#[derive(Debug, Clone)]
pub struct UpdateCommentService<Q, R>
where
    Q: CommentQuery,
    R: CommentRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateCommentService<Q, R>
where
    Q: CommentQuery,
    R: CommentRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateCommentUseCase for UpdateCommentService<Q, R>
where
    Q: CommentQuery + Send + Sync,
    R: CommentRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateCommentCommand,
    ) -> Result<CommentResult, UpdateCommentError> {
        // 1️⃣ Load the comment within its topic
        let existing = self
            .query
            .find_comment(command.topic_id(), command.comment_id())
            .await
            .map_err(|e| UpdateCommentError::RepositoryError(e.to_string()))?
            .ok_or(UpdateCommentError::CommentNotFound)?;

        // 2️⃣ Only the author edits
        if existing.username != command.editor() {
            tracing::warn!(
                comment_id = %existing.id,
                editor = %command.editor(),
                "Rejected comment update from non-author"
            );
            return Err(UpdateCommentError::Forbidden);
        }

        // 3️⃣ Persist
        self.repository
            .update_content(command.comment_id(), command.content().to_string())
            .await
            .map_err(|e| match e {
                CommentRepositoryError::CommentNotFound => UpdateCommentError::CommentNotFound,
                CommentRepositoryError::Validation(msg) => UpdateCommentError::Rejected(msg),
                CommentRepositoryError::DatabaseError(msg) => {
                    UpdateCommentError::RepositoryError(msg)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::{mock, predicate::*};
    use uuid::Uuid;

    use crate::comment::application::ports::outgoing::{CommentQueryError, CreateCommentData};
    use crate::tests::support::fixtures::sample_comment;

    mock! {
        pub CommentQueryMock {}
        #[async_trait]
        impl CommentQuery for CommentQueryMock {
            async fn list_for_topic(&self, topic_id: Uuid) -> Result<Vec<CommentResult>, CommentQueryError>;
            async fn find_comment(&self, topic_id: Uuid, comment_id: Uuid) -> Result<Option<CommentResult>, CommentQueryError>;
        }
    }

    mock! {
        pub CommentRepositoryMock {}
        #[async_trait]
        impl CommentRepository for CommentRepositoryMock {
            async fn create_comment(&self, data: CreateCommentData) -> Result<CommentResult, CommentRepositoryError>;
            async fn update_content(&self, comment_id: Uuid, content: String) -> Result<CommentResult, CommentRepositoryError>;
            async fn delete_comment(&self, comment_id: Uuid) -> Result<(), CommentRepositoryError>;
        }
    }

    fn command(existing: &CommentResult, editor: &str) -> UpdateCommentCommand {
        UpdateCommentCommand::new(
            existing.topic_id,
            existing.id,
            editor.to_string(),
            "Try Discogs or a local shop".to_string(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn author_can_edit_comment() {
        let existing = sample_comment(Uuid::new_v4(), "bob", "Try Discogs");
        let comment_id = existing.id;
        let mut updated = existing.clone();
        updated.content = "Try Discogs or a local shop".to_string();

        let mut query = MockCommentQueryMock::new();
        let found = existing.clone();
        query
            .expect_find_comment()
            .with(eq(existing.topic_id), eq(comment_id))
            .returning(move |_, _| Ok(Some(found.clone())));

        let mut repository = MockCommentRepositoryMock::new();
        let returned = updated.clone();
        repository
            .expect_update_content()
            .with(eq(comment_id), eq("Try Discogs or a local shop".to_string()))
            .times(1)
            .returning(move |_, _| Ok(returned.clone()));

        let service = UpdateCommentService::new(query, repository);

        let result = service.execute(command(&existing, "bob")).await.unwrap();
        assert_eq!(result, updated);
    }

    #[tokio::test]
    async fn other_user_cannot_edit() {
        let existing = sample_comment(Uuid::new_v4(), "bob", "Try Discogs");

        let mut query = MockCommentQueryMock::new();
        let found = existing.clone();
        query
            .expect_find_comment()
            .returning(move |_, _| Ok(Some(found.clone())));

        let mut repository = MockCommentRepositoryMock::new();
        repository.expect_update_content().never();

        let service = UpdateCommentService::new(query, repository);

        let result = service.execute(command(&existing, "alice")).await;
        assert!(matches!(result, Err(UpdateCommentError::Forbidden)));
    }

    #[tokio::test]
    async fn comment_outside_topic_is_not_found() {
        let existing = sample_comment(Uuid::new_v4(), "bob", "Try Discogs");

        let mut query = MockCommentQueryMock::new();
        query.expect_find_comment().returning(|_, _| Ok(None));

        let service = UpdateCommentService::new(query, MockCommentRepositoryMock::new());

        let result = service.execute(command(&existing, "bob")).await;
        assert!(matches!(result, Err(UpdateCommentError::CommentNotFound)));
    }
}
