mod create_topic_service;
mod delete_topic_service;
mod update_topic_service;

pub use create_topic_service::CreateTopicService;
pub use delete_topic_service::DeleteTopicService;
pub use update_topic_service::UpdateTopicService;
