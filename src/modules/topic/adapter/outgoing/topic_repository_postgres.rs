use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::topic::application::ports::outgoing::{
    CreateTopicData, TopicRepository, TopicRepositoryError, TopicResult, UpdateTopicData,
};

// SeaORM entity imports
use super::sea_orm_entity::{
    ActiveModel as TopicActiveModel, Entity as TopicEntity, Model as TopicModel,
};

#[derive(Debug, Clone)]
pub struct TopicRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TopicRepository for TopicRepositoryPostgres {
    async fn create_topic(
        &self,
        data: CreateTopicData,
    ) -> Result<TopicResult, TopicRepositoryError> {
        let now = Utc::now().fixed_offset();
        let active = TopicActiveModel {
            id: Set(Uuid::new_v4()),
            created_by: Set(data.created_by),
            title: Set(data.title),
            description: Set(data.description),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted: TopicModel = active
            .insert(&*self.db)
            .await
            .map_err(|e| TopicRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_result())
    }

    async fn update_topic(
        &self,
        topic_id: Uuid,
        data: UpdateTopicData,
    ) -> Result<TopicResult, TopicRepositoryError> {
        let active = TopicActiveModel {
            id: Set(topic_id),
            title: Set(data.title),
            description: Set(data.description),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let updated: TopicModel = active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => {
                TopicRepositoryError::TopicNotFound
            }
            other => TopicRepositoryError::DatabaseError(other.to_string()),
        })?;

        Ok(updated.to_result())
    }

    async fn delete_topic(&self, topic_id: Uuid) -> Result<(), TopicRepositoryError> {
        let result = TopicEntity::delete_by_id(topic_id)
            .exec(&*self.db)
            .await
            .map_err(|e| TopicRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(TopicRepositoryError::TopicNotFound);
        }

        Ok(())
    }
}
