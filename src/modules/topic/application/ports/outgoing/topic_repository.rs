use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::topic::application::domain::entities::UserId;

// Input DTO for persisting a new topic. The id is minted by the web layer,
// never by the repository.
#[derive(Debug, Clone)]
pub struct CreateTopicData {
    pub id: Uuid,
    pub author: UserId,
    pub title: String,
    pub content: String,
}

// Unified output DTO for all topic operations that return topic data.
#[derive(Debug, Clone, Serialize)]
pub struct TopicRecord {
    pub id: Uuid,
    pub author: UserId,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Topic not found")]
    TopicNotFound,

    #[error("Topic already exists")]
    TopicAlreadyExists,
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn create_topic(&self, data: CreateTopicData)
        -> Result<TopicRecord, TopicRepositoryError>;

    async fn update_topic(
        &self,
        topic_id: Uuid,
        title: String,
        content: String,
    ) -> Result<TopicRecord, TopicRepositoryError>;

    async fn soft_delete_topic(&self, topic_id: Uuid) -> Result<(), TopicRepositoryError>;
}
