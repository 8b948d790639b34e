use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    shared::api::ApiResponse,
    topic::application::domain::entities::UserId,
    topic::application::ports::incoming::use_cases::{
        UpdateTopicCommand, UpdateTopicCommandError, UpdateTopicError,
    },
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTopicRequest {
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateTopicResponse {
    pub message: String,
}

// The target topic id rides in the path, same position as delete. The
// original design took no id at all and could not address one topic among
// several by the same author.
#[put("/topic/{id}")]
pub async fn update_topic_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateTopicRequest>,
) -> impl Responder {
    let topic_id = path.into_inner();
    let author = UserId::from(payload.user_id);

    let command = match UpdateTopicCommand::new(
        topic_id,
        author,
        payload.title.clone(),
        payload.content.clone(),
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.update_topic_use_case.execute(command).await {
        Ok(_) => ApiResponse::success(UpdateTopicResponse {
            message: "Topic updated successfully".to_string(),
        }),
        Err(err) => map_update_topic_error(err),
    }
}

fn map_command_error(err: UpdateTopicCommandError) -> actix_web::HttpResponse {
    match err {
        UpdateTopicCommandError::EmptyTitle => {
            ApiResponse::bad_request("EMPTY_TITLE", "Title cannot be empty")
        }
        UpdateTopicCommandError::TitleTooLong => {
            ApiResponse::bad_request("TITLE_TOO_LONG", "Title must not exceed 100 characters")
        }
    }
}

fn map_update_topic_error(err: UpdateTopicError) -> actix_web::HttpResponse {
    match err {
        UpdateTopicError::TopicNotFound => {
            ApiResponse::not_found("TOPIC_NOT_FOUND", "Topic not found")
        }
        UpdateTopicError::Forbidden => {
            ApiResponse::forbidden("FORBIDDEN", "You are not the author of this topic")
        }
        UpdateTopicError::RepositoryError(msg) => {
            tracing::error!(error = %msg, "update topic failed");
            ApiResponse::internal_error(
                "TOPIC_UPDATE_FAILED",
                &format!("Error updating topic: {msg}"),
            )
        }
    }
}
