use async_trait::async_trait;

use crate::topic::application::ports::{
    incoming::use_cases::{UpdateTopicCommand, UpdateTopicError, UpdateTopicUseCase},
    outgoing::{TopicQuery, TopicRecord, TopicRepository, TopicRepositoryError},
};

#[derive(Debug, Clone)]
pub struct UpdateTopicService<Q, R>
where
    Q: TopicQuery,
    R: TopicRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateTopicService<Q, R>
where
    Q: TopicQuery,
    R: TopicRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateTopicUseCase for UpdateTopicService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateTopicCommand) -> Result<TopicRecord, UpdateTopicError> {
        // Resolve the target first. Soft-deleted topics are invisible to the
        // query port, so they surface as TopicNotFound here.
        let existing = self
            .query
            .find_topic(command.topic_id())
            .await
            .map_err(|e| UpdateTopicError::RepositoryError(e.to_string()))?
            .ok_or(UpdateTopicError::TopicNotFound)?;

        if existing.author != *command.author() {
            return Err(UpdateTopicError::Forbidden);
        }

        self.repository
            .update_topic(
                command.topic_id(),
                command.title().to_string(),
                command.content().to_string(),
            )
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicNotFound => UpdateTopicError::TopicNotFound,
                other => UpdateTopicError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::eq;
    use uuid::Uuid;

    use crate::topic::application::domain::entities::UserId;
    use crate::topic::application::ports::outgoing::{
        CreateTopicData, TopicQueryError, TopicQueryResult,
    };

    mock! {
        Query {}

        #[async_trait]
        impl TopicQuery for Query {
            async fn find_topic(
                &self,
                topic_id: Uuid,
            ) -> Result<Option<TopicQueryResult>, TopicQueryError>;
        }
    }

    mock! {
        Repo {}

        #[async_trait]
        impl TopicRepository for Repo {
            async fn create_topic(
                &self,
                data: CreateTopicData,
            ) -> Result<TopicRecord, TopicRepositoryError>;

            async fn update_topic(
                &self,
                topic_id: Uuid,
                title: String,
                content: String,
            ) -> Result<TopicRecord, TopicRepositoryError>;

            async fn soft_delete_topic(&self, topic_id: Uuid) -> Result<(), TopicRepositoryError>;
        }
    }

    fn stored_topic(topic_id: Uuid, author: UserId) -> TopicQueryResult {
        TopicQueryResult {
            id: topic_id,
            author,
            title: "Old title".to_string(),
            content: "Old content".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn valid_command(topic_id: Uuid, author: UserId) -> UpdateTopicCommand {
        UpdateTopicCommand::new(
            topic_id,
            author,
            "New title".to_string(),
            "New content".to_string(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn update_topic_success_forwards_exact_fields() {
        let topic_id = Uuid::new_v4();
        let author = UserId::from(Uuid::new_v4());

        let mut query = MockQuery::new();
        query
            .expect_find_topic()
            .with(eq(topic_id))
            .times(1)
            .returning(move |_| Ok(Some(stored_topic(topic_id, author))));

        let mut repo = MockRepo::new();
        repo.expect_update_topic()
            .with(
                eq(topic_id),
                eq("New title".to_string()),
                eq("New content".to_string()),
            )
            .times(1)
            .returning(move |id, title, content| {
                Ok(TopicRecord {
                    id,
                    author,
                    title,
                    content,
                })
            });

        let service = UpdateTopicService::new(query, repo);

        let result = service.execute(valid_command(topic_id, author)).await;

        let topic = result.expect("update should succeed");
        assert_eq!(topic.id, topic_id);
        assert_eq!(topic.title, "New title");
        assert_eq!(topic.content, "New content");
    }

    #[tokio::test]
    async fn update_topic_unknown_id_is_not_found() {
        let topic_id = Uuid::new_v4();
        let author = UserId::from(Uuid::new_v4());

        let mut query = MockQuery::new();
        query.expect_find_topic().returning(|_| Ok(None));

        let mut repo = MockRepo::new();
        repo.expect_update_topic().times(0);

        let service = UpdateTopicService::new(query, repo);

        let result = service.execute(valid_command(topic_id, author)).await;

        assert!(matches!(result, Err(UpdateTopicError::TopicNotFound)));
    }

    #[tokio::test]
    async fn update_topic_wrong_author_is_forbidden() {
        let topic_id = Uuid::new_v4();
        let owner = UserId::from(Uuid::new_v4());
        let intruder = UserId::from(Uuid::new_v4());

        let mut query = MockQuery::new();
        query
            .expect_find_topic()
            .returning(move |_| Ok(Some(stored_topic(topic_id, owner))));

        let mut repo = MockRepo::new();
        repo.expect_update_topic().times(0);

        let service = UpdateTopicService::new(query, repo);

        let result = service.execute(valid_command(topic_id, intruder)).await;

        assert!(matches!(result, Err(UpdateTopicError::Forbidden)));
    }

    #[tokio::test]
    async fn update_topic_query_error_is_mapped() {
        let topic_id = Uuid::new_v4();
        let author = UserId::from(Uuid::new_v4());

        let mut query = MockQuery::new();
        query
            .expect_find_topic()
            .returning(|_| Err(TopicQueryError::DatabaseError("db down".to_string())));

        let repo = MockRepo::new();

        let service = UpdateTopicService::new(query, repo);

        let result = service.execute(valid_command(topic_id, author)).await;

        match result {
            Err(UpdateTopicError::RepositoryError(msg)) => assert!(msg.contains("db down")),
            other => panic!("Expected RepositoryError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn update_topic_repository_error_is_mapped() {
        let topic_id = Uuid::new_v4();
        let author = UserId::from(Uuid::new_v4());

        let mut query = MockQuery::new();
        query
            .expect_find_topic()
            .returning(move |_| Ok(Some(stored_topic(topic_id, author))));

        let mut repo = MockRepo::new();
        repo.expect_update_topic().returning(|_, _, _| {
            Err(TopicRepositoryError::DatabaseError(
                "connection lost".to_string(),
            ))
        });

        let service = UpdateTopicService::new(query, repo);

        let result = service.execute(valid_command(topic_id, author)).await;

        match result {
            Err(UpdateTopicError::RepositoryError(msg)) => assert!(msg.contains("connection lost")),
            other => panic!("Expected RepositoryError, got {:?}", other),
        }
    }
}
