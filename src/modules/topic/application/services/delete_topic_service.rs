use async_trait::async_trait;
use uuid::Uuid;

use crate::topic::application::ports::{
    incoming::use_cases::{DeleteTopicError, DeleteTopicUseCase},
    outgoing::{TopicRepository, TopicRepositoryError},
};

/// Marks a topic deleted without removing the row. An already-deleted or
/// unknown topic reports TopicNotFound; there is no deduplication beyond
/// that.
#[derive(Debug, Clone)]
pub struct DeleteTopicService<R>
where
    R: TopicRepository,
{
    repository: R,
}

impl<R> DeleteTopicService<R>
where
    R: TopicRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteTopicUseCase for DeleteTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, topic_id: Uuid) -> Result<(), DeleteTopicError> {
        self.repository
            .soft_delete_topic(topic_id)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicNotFound => DeleteTopicError::TopicNotFound,
                other => DeleteTopicError::RepositoryError(other.to_string()),
            })
    }
}
