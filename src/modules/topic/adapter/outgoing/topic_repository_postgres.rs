use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    Set, SqlErr,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::topic::application::ports::outgoing::{
    CreateTopicData, TopicRecord, TopicRepository, TopicRepositoryError,
};

// SeaORM entity imports
use super::sea_orm_entity::{
    ActiveModel as TopicActiveModel, Column as TopicColumn, Entity as TopicEntity,
    Model as TopicModel,
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
    ) -> Result<TopicRecord, TopicRepositoryError> {
        let active = TopicActiveModel {
            id: Set(data.id),
            user_id: Set(data.author.into()),
            title: Set(data.title),
            content: Set(data.content),
            is_deleted: Set(false),
            ..Default::default()
        };

        let inserted: TopicModel = active.insert(&*self.db).await.map_err(|e| {
            match e.sql_err() {
                // unique index on (user_id, lower(title))
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    TopicRepositoryError::TopicAlreadyExists
                }
                _ => TopicRepositoryError::DatabaseError(e.to_string()),
            }
        })?;

        Ok(inserted.to_repository_record())
    }

    async fn update_topic(
        &self,
        topic_id: Uuid,
        title: String,
        content: String,
    ) -> Result<TopicRecord, TopicRepositoryError> {
        let active = TopicActiveModel {
            id: Set(topic_id),
            title: Set(title),
            content: Set(content),
            ..Default::default()
        };

        let updated: TopicModel = active.update(&*self.db).await.map_err(|e| match e {
            sea_orm::DbErr::RecordNotUpdated => TopicRepositoryError::TopicNotFound,
            other => TopicRepositoryError::DatabaseError(other.to_string()),
        })?;

        Ok(updated.to_repository_record())
    }

    async fn soft_delete_topic(&self, topic_id: Uuid) -> Result<(), TopicRepositoryError> {
        // Filter on is_deleted so a second delete of the same topic reports
        // not-found instead of silently succeeding.
        let result = TopicEntity::update_many()
            .col_expr(TopicColumn::IsDeleted, Expr::value(true))
            .filter(TopicColumn::Id.eq(topic_id))
            .filter(TopicColumn::IsDeleted.eq(false))
            .exec(&*self.db)
            .await
            .map_err(|e| TopicRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(TopicRepositoryError::TopicNotFound);
        }

        Ok(())
    }
}
