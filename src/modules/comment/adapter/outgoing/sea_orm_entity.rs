use crate::comment::application::ports::outgoing::CommentResult;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub topic_id: Uuid,

    pub username: String,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_result(&self) -> CommentResult {
        CommentResult {
            id: self.id,
            topic_id: self.topic_id,
            username: self.username.clone(),
            content: self.content.clone(),
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::topic::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::TopicId",
        to = "crate::topic::adapter::outgoing::sea_orm_entity::Column::Id",
        on_delete = "Cascade"
    )]
    Topic,
}

impl Related<crate::topic::adapter::outgoing::sea_orm_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Topic.def()
    }
}

/// Prefix of every validation failure raised by `before_save`, so the
/// repository can tell them apart from driver errors.
pub const VALIDATION_PREFIX: &str = "comment validation: ";

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let Set(username) = &self.username {
            let trimmed = username.trim().to_string();
            if trimmed.is_empty() {
                return Err(DbErr::Custom(format!("{VALIDATION_PREFIX}username is blank")));
            }
            self.username = Set(trimmed);
        }

        if let Set(content) = &self.content {
            if content.trim().is_empty() {
                return Err(DbErr::Custom(format!("{VALIDATION_PREFIX}content is blank")));
            }
        }

        if insert && self.created_at.is_not_set() {
            self.created_at = Set(chrono::Utc::now().fixed_offset());
        }

        Ok(self)
    }
}
