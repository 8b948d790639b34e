use async_trait::async_trait;
use uuid::Uuid;

use crate::topic::application::domain::entities::UserId;
use crate::topic::application::ports::outgoing::TopicRecord;

//
// ──────────────────────────────────────────────────────────
// Create Topic Command
// ──────────────────────────────────────────────────────────
//

/// The topic id is supplied by the caller (the web layer mints one per
/// request); the service never generates identifiers.
#[derive(Debug, Clone)]
pub struct CreateTopicCommand {
    id: Uuid,
    author: UserId,
    title: String,
    content: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateTopicCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title too long")]
    TitleTooLong,
}

impl CreateTopicCommand {
    pub fn new(
        id: Uuid,
        author: UserId,
        title: String,
        content: String,
    ) -> Result<Self, CreateTopicCommandError> {
        let title = title.trim();

        if title.is_empty() {
            return Err(CreateTopicCommandError::EmptyTitle);
        }

        if title.len() > 100 {
            return Err(CreateTopicCommandError::TitleTooLong);
        }

        Ok(Self {
            id,
            author,
            title: title.to_string(),
            content,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn author(&self) -> &UserId {
        &self.author
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTopicError {
    #[error("Topic already exists")]
    TopicAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateTopicUseCase: Send + Sync {
    async fn execute(&self, command: CreateTopicCommand) -> Result<TopicRecord, CreateTopicError>;
}
