use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::comment::application::ports::outgoing::{
    CommentQuery, CommentQueryError, CommentResult,
};

use super::sea_orm_entity::{
    Column as CommentColumn, Entity as CommentEntity, Model as CommentModel,
};

#[derive(Debug, Clone)]
pub struct CommentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentQuery for CommentQueryPostgres {
    async fn list_for_topic(&self, topic_id: Uuid) -> Result<Vec<CommentResult>, CommentQueryError> {
        let models: Vec<CommentModel> = CommentEntity::find()
            .filter(CommentColumn::TopicId.eq(topic_id))
            .order_by_asc(CommentColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| CommentQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(CommentModel::to_result).collect())
    }

    async fn find_comment(
        &self,
        topic_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Option<CommentResult>, CommentQueryError> {
        let model = CommentEntity::find_by_id(comment_id)
            .filter(CommentColumn::TopicId.eq(topic_id))
            .one(&*self.db)
            .await
            .map_err(|e| CommentQueryError::DatabaseError(e.to_string()))?;

        Ok(model.as_ref().map(CommentModel::to_result))
    }
}
