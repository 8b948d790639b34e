use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::topic::application::domain::entities::UserId;

#[derive(Debug, Clone, Serialize)]
pub struct TopicQueryResult {
    pub id: Uuid,
    pub author: UserId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side of the topic store. Soft-deleted topics are never returned.
#[async_trait]
pub trait TopicQuery: Send + Sync {
    async fn find_topic(&self, topic_id: Uuid)
        -> Result<Option<TopicQueryResult>, TopicQueryError>;
}
