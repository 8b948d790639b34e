use actix_web::{delete, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::DeleteTopicError,
    AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteTopicResponse {
    pub message: String,
}

// Malformed ids never reach this handler; web::Path<Uuid> rejects them with
// a 404 at extraction time.
#[delete("/topic/{id}")]
pub async fn delete_topic_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data.delete_topic_use_case.execute(topic_id).await {
        Ok(_) => ApiResponse::success(DeleteTopicResponse {
            message: "Topic deleted successfully".to_string(),
        }),
        Err(err) => map_delete_topic_error(err),
    }
}

fn map_delete_topic_error(err: DeleteTopicError) -> actix_web::HttpResponse {
    match err {
        DeleteTopicError::TopicNotFound => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }
        DeleteTopicError::RepositoryError(msg) => {
            tracing::error!(error = %msg, "delete topic failed");
            ApiResponse::internal_error(
                "TOPIC_DELETE_FAILED",
                &format!("Error deleting topic: {msg}"),
            )
        }
    }
}
