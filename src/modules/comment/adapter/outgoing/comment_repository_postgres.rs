use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::comment::application::ports::outgoing::{
    CommentRepository, CommentRepositoryError, CommentResult, CreateCommentData,
};

use super::sea_orm_entity::{
    ActiveModel as CommentActiveModel, Entity as CommentEntity, Model as CommentModel,
    VALIDATION_PREFIX,
};

#[derive(Debug, Clone)]
pub struct CommentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> CommentRepositoryError {
    match e {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => {
            CommentRepositoryError::CommentNotFound
        }
        DbErr::Custom(msg) if msg.starts_with(VALIDATION_PREFIX) => {
            CommentRepositoryError::Validation(msg[VALIDATION_PREFIX.len()..].to_string())
        }
        other => CommentRepositoryError::DatabaseError(other.to_string()),
    }
}

#[async_trait]
impl CommentRepository for CommentRepositoryPostgres {
    async fn create_comment(
        &self,
        data: CreateCommentData,
    ) -> Result<CommentResult, CommentRepositoryError> {
        // created_at is filled in by the entity on insert
        let active = CommentActiveModel {
            id: Set(Uuid::new_v4()),
            topic_id: Set(data.topic_id),
            username: Set(data.username),
            content: Set(data.content),
            created_at: NotSet,
        };

        let inserted: CommentModel = active.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_result())
    }

    async fn update_content(
        &self,
        comment_id: Uuid,
        content: String,
    ) -> Result<CommentResult, CommentRepositoryError> {
        let active = CommentActiveModel {
            id: Set(comment_id),
            content: Set(content),
            ..Default::default()
        };

        let updated: CommentModel = active.update(&*self.db).await.map_err(map_db_err)?;

        Ok(updated.to_result())
    }

    async fn delete_comment(&self, comment_id: Uuid) -> Result<(), CommentRepositoryError> {
        let result = CommentEntity::delete_by_id(comment_id)
            .exec(&*self.db)
            .await
            .map_err(|e| CommentRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(CommentRepositoryError::CommentNotFound);
        }

        Ok(())
    }
}
