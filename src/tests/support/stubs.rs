use async_trait::async_trait;
use uuid::Uuid;

use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicCommand, CreateTopicError, CreateTopicUseCase, DeleteTopicError,
    DeleteTopicUseCase, UpdateTopicCommand, UpdateTopicError, UpdateTopicUseCase,
};
use crate::topic::application::ports::outgoing::TopicRecord;

// Default stand-ins for use cases a test does not exercise. Any accidental
// call fails loudly as a repository error.

pub struct StubCreateTopicUseCase;

#[async_trait]
impl CreateTopicUseCase for StubCreateTopicUseCase {
    async fn execute(&self, _command: CreateTopicCommand) -> Result<TopicRecord, CreateTopicError> {
        Err(CreateTopicError::RepositoryError(
            "stub use case not wired".to_string(),
        ))
    }
}

pub struct StubUpdateTopicUseCase;

#[async_trait]
impl UpdateTopicUseCase for StubUpdateTopicUseCase {
    async fn execute(&self, _command: UpdateTopicCommand) -> Result<TopicRecord, UpdateTopicError> {
        Err(UpdateTopicError::RepositoryError(
            "stub use case not wired".to_string(),
        ))
    }
}

pub struct StubDeleteTopicUseCase;

#[async_trait]
impl DeleteTopicUseCase for StubDeleteTopicUseCase {
    async fn execute(&self, _topic_id: Uuid) -> Result<(), DeleteTopicError> {
        Err(DeleteTopicError::RepositoryError(
            "stub use case not wired".to_string(),
        ))
    }
}
