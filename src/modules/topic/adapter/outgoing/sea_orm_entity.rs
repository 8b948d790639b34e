use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::topic::application::domain::entities::UserId;
use crate::topic::application::ports::outgoing::{TopicQueryResult, TopicRecord};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub user_id: Uuid,

    pub title: String,

    pub content: String,

    pub is_deleted: bool,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_repository_record(&self) -> TopicRecord {
        TopicRecord {
            id: self.id,
            author: UserId::from(self.user_id),
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }

    pub fn to_query_result(&self) -> TopicQueryResult {
        TopicQueryResult {
            id: self.id,
            author: UserId::from(self.user_id),
            title: self.title.clone(),
            content: self.content.clone(),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
