pub mod sea_orm_entity;
pub mod topic_query_postgres;
pub mod topic_repository_postgres;

pub use topic_query_postgres::TopicQueryPostgres;
pub use topic_repository_postgres::TopicRepositoryPostgres;
