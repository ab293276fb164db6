use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::topic::application::ports::outgoing::{
    TopicQuery, TopicQueryError, TopicResult,
};

// SeaORM entity
use super::sea_orm_entity::{Column as TopicColumn, Entity as TopicEntity, Model as TopicModel};

#[derive(Debug, Clone)]
pub struct TopicQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TopicQuery for TopicQueryPostgres {
    async fn list_topics(&self) -> Result<Vec<TopicResult>, TopicQueryError> {
        let models: Vec<TopicModel> = TopicEntity::find()
            .order_by_asc(TopicColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(TopicModel::to_result).collect())
    }

    async fn find_topic(&self, topic_id: Uuid) -> Result<Option<TopicResult>, TopicQueryError> {
        let model = TopicEntity::find_by_id(topic_id)
            .one(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        Ok(model.as_ref().map(TopicModel::to_result))
    }
}
