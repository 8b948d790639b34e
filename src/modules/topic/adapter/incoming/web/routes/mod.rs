mod create_topic;
mod delete_topic;
mod update_topic;

pub use create_topic::{
    __path_create_topic_handler, create_topic_handler, CreateTopicRequest, CreateTopicResponse,
};
pub use delete_topic::{delete_topic_handler, DeleteTopicResponse};
pub use update_topic::{update_topic_handler, UpdateTopicRequest, UpdateTopicResponse};
