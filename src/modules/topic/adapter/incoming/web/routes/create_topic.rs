use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    shared::api::ApiResponse,
    topic::application::domain::entities::UserId,
    topic::application::ports::incoming::use_cases::{
        CreateTopicCommand, CreateTopicCommandError, CreateTopicError,
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request / Response DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTopicRequest {
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateTopicResponse {
    pub id: Uuid,
    pub message: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/topic",
    tag = "topics",
    request_body = CreateTopicRequest,
    responses(
        (
            status = 201,
            description = "Topic created successfully",
            body = inline(SuccessResponse<CreateTopicResponse>),
            example = json!({
                "success": true,
                "data": {
                    "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
                    "message": "Topic created successfully"
                }
            })
        ),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 409, description = "Duplicate title for this author", body = ErrorResponse),
        (status = 500, description = "Repository failure", body = ErrorResponse),
    )
)]
#[post("/topic")]
pub async fn create_topic_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateTopicRequest>,
) -> impl Responder {
    // The endpoint mints the topic id; clients never supply one.
    let topic_id = Uuid::new_v4();
    let author = UserId::from(payload.user_id);

    let command = match CreateTopicCommand::new(
        topic_id,
        author,
        payload.title.clone(),
        payload.content.clone(),
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.create_topic_use_case.execute(command).await {
        Ok(topic) => ApiResponse::created(CreateTopicResponse {
            id: topic.id,
            message: "Topic created successfully".to_string(),
        }),
        Err(err) => map_create_topic_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: CreateTopicCommandError) -> actix_web::HttpResponse {
    match err {
        CreateTopicCommandError::EmptyTitle => {
            ApiResponse::bad_request("EMPTY_TITLE", "Title cannot be empty")
        }
        CreateTopicCommandError::TitleTooLong => {
            ApiResponse::bad_request("TITLE_TOO_LONG", "Title must not exceed 100 characters")
        }
    }
}

fn map_create_topic_error(err: CreateTopicError) -> actix_web::HttpResponse {
    match err {
        CreateTopicError::TopicAlreadyExists => {
            ApiResponse::conflict("TOPIC_ALREADY_EXISTS", "Topic already exists")
        }
        CreateTopicError::RepositoryError(msg) => {
            tracing::error!(error = %msg, "create topic failed");
            ApiResponse::internal_error(
                "TOPIC_CREATE_FAILED",
                &format!("Error creating topic: {msg}"),
            )
        }
    }
}
