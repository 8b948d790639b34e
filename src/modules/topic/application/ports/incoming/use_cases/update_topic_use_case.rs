use async_trait::async_trait;
use uuid::Uuid;

use crate::topic::application::domain::entities::UserId;
use crate::topic::application::ports::outgoing::TopicRecord;

//
// ──────────────────────────────────────────────────────────
// Update Topic Command
// ──────────────────────────────────────────────────────────
//

/// Targets one topic by id. The author field is the caller's claimed
/// identity and must match the stored author for the update to go through.
#[derive(Debug, Clone)]
pub struct UpdateTopicCommand {
    topic_id: Uuid,
    author: UserId,
    title: String,
    content: String,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateTopicCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title too long")]
    TitleTooLong,
}

impl UpdateTopicCommand {
    pub fn new(
        topic_id: Uuid,
        author: UserId,
        title: String,
        content: String,
    ) -> Result<Self, UpdateTopicCommandError> {
        let title = title.trim();

        if title.is_empty() {
            return Err(UpdateTopicCommandError::EmptyTitle);
        }

        if title.len() > 100 {
            return Err(UpdateTopicCommandError::TitleTooLong);
        }

        Ok(Self {
            topic_id,
            author,
            title: title.to_string(),
            content,
        })
    }

    pub fn topic_id(&self) -> Uuid {
        self.topic_id
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
pub enum UpdateTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("You are not the author of this topic")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateTopicUseCase: Send + Sync {
    async fn execute(&self, command: UpdateTopicCommand) -> Result<TopicRecord, UpdateTopicError>;
}
