use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::topic::application::ports::outgoing::{
    TopicQuery, TopicQueryError, TopicQueryResult,
};

use super::sea_orm_entity::{Column as TopicColumn, Entity as TopicEntity};

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
    async fn find_topic(
        &self,
        topic_id: Uuid,
    ) -> Result<Option<TopicQueryResult>, TopicQueryError> {
        let found = TopicEntity::find_by_id(topic_id)
            .filter(TopicColumn::IsDeleted.eq(false))
            .one(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        Ok(found.map(|model| model.to_query_result()))
    }
}

#[cfg(test)]
mod tests {
    use super::super::sea_orm_entity::Model as TopicModel;
    use super::*;
    use crate::topic::application::domain::entities::UserId;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, RuntimeErr};

    #[tokio::test]
    async fn test_find_topic_returns_row() {
        let topic_id = Uuid::new_v4();
        let author = UserId::from(Uuid::new_v4());
        let now = Utc::now().fixed_offset();

        let model = TopicModel {
            id: topic_id,
            user_id: author.into(),
            title: "Rust".to_string(),
            content: "Rust topic".to_string(),
            is_deleted: false,
            created_at: now,
            updated_at: now,
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let query = TopicQueryPostgres::new(Arc::new(db));

        let result = query.find_topic(topic_id).await;

        assert!(result.is_ok());
        let found = result.unwrap().expect("expected a topic");
        assert_eq!(found.id, topic_id);
        assert_eq!(found.author, author);
        assert_eq!(found.title, "Rust");
    }

    #[tokio::test]
    async fn test_find_topic_missing_returns_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<TopicModel>::new()])
            .into_connection();

        let query = TopicQueryPostgres::new(Arc::new(db));

        let result = query.find_topic(Uuid::new_v4()).await;

        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn test_find_topic_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![sea_orm::DbErr::Query(RuntimeErr::Internal(
                "select failed".into(),
            ))])
            .into_connection();

        let query = TopicQueryPostgres::new(Arc::new(db));

        let result = query.find_topic(Uuid::new_v4()).await;

        assert!(matches!(result, Err(TopicQueryError::DatabaseError(_))));
    }
}
