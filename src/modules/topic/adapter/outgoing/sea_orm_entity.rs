use crate::topic::application::ports::outgoing::TopicResult;
use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub created_by: String,

    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_result(&self) -> TopicResult {
        TopicResult {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            created_by: self.created_by.clone(),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::comment::adapter::outgoing::sea_orm_entity::Entity")]
    Comment,
}

impl Related<crate::comment::adapter::outgoing::sea_orm_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            let insert = _insert;
            if !insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
