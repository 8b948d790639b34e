use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

use crate::topic::adapter::incoming::web::routes::{
    CreateTopicRequest, CreateTopicResponse, DeleteTopicResponse, UpdateTopicRequest,
    UpdateTopicResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Forum Topic API",
        version = "1.0.0",
        description = "Create, update, and delete forum topics"
    ),
    paths(
        crate::topic::adapter::incoming::web::routes::create_topic_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<CreateTopicResponse>,
            ErrorResponse,
            ErrorDetail,

            // Topic DTOs
            CreateTopicRequest,
            CreateTopicResponse,
            UpdateTopicRequest,
            UpdateTopicResponse,
            DeleteTopicResponse
        )
    ),
    tags(
        (name = "topics", description = "Topic management endpoints"),
    )
)]
pub struct ApiDoc;
