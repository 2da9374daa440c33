use crate::error::{ApiError, ApiResult};
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;
use axum::{extract::State, Json};
use neethub_ai::{fallback, Fallback};
use neethub_core::{new_id, now, BuddyRequest, ChatMessage, GenerateMcqRequest};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BuddyResponse {
    pub response: String,
}

/// A short motivational line. Never fails: a fixed sentence stands in when
/// generation does.
#[utoipa::path(
    get,
    path = "/api/ai/motivation",
    tag = "ai",
    responses((status = 200, description = "Motivational message", body = MessageResponse))
)]
pub async fn motivation(State(state): State<AppState>) -> Json<MessageResponse> {
    let message = state
        .gateway
        .motivation()
        .await
        .or_fallback("motivation", || fallback::MOTIVATION.to_string());
    Json(MessageResponse { message })
}

/// Pass a caller-written prompt through with a JSON-only instruction.
#[utoipa::path(
    post,
    path = "/api/ai/generate-mcq",
    tag = "ai",
    request_body = GenerateMcqRequest,
    responses(
        (status = 200, description = "Generated MCQ set as free-form JSON, or the sample set on failure"),
        (status = 422, description = "Missing prompt")
    )
)]
pub async fn generate_mcq(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<GenerateMcqRequest>,
) -> ApiResult<Json<Value>> {
    if input.prompt.trim().is_empty() {
        return Err(ApiError::Validation("prompt must not be empty".into()));
    }
    let mcq = state
        .gateway
        .raw_json(&input.prompt)
        .await
        .or_fallback("MCQ generation", fallback::mcq_set);
    Ok(Json(mcq))
}

/// Answer a student's question and keep the exchange. A failed generation
/// returns an apology and stores nothing.
#[utoipa::path(
    post,
    path = "/api/ai/buddy",
    tag = "ai",
    request_body = BuddyRequest,
    responses(
        (status = 200, description = "Tutor reply", body = BuddyResponse),
        (status = 422, description = "Invalid request")
    )
)]
pub async fn buddy(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<BuddyRequest>,
) -> ApiResult<Json<BuddyResponse>> {
    input.validate()?;

    let response = match state.gateway.tutor_answer(&input.message).await {
        Ok(answer) => answer,
        Err(e) => {
            warn!(user_id = %input.user_id, "Buddy generation failed, serving fallback: {}", e);
            return Ok(Json(BuddyResponse {
                response: fallback::BUDDY_REPLY.to_string(),
            }));
        }
    };

    let chat = ChatMessage {
        id: new_id(),
        user_id: input.user_id,
        message: input.message,
        response,
        created_at: now(),
    };
    state.store.insert_chat(&chat).await?;
    info!(user_id = %chat.user_id, "Stored buddy exchange");

    Ok(Json(BuddyResponse {
        response: chat.response,
    }))
}

#[utoipa::path(
    get,
    path = "/api/ai/buddy/history/{user_id}",
    tag = "ai",
    params(("user_id" = String, Path, description = "User id")),
    responses((status = 200, description = "Most recent exchanges, newest first", body = Vec<ChatMessage>))
)]
pub async fn chat_history(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
) -> ApiResult<Json<Vec<ChatMessage>>> {
    Ok(Json(state.store.chat_history(&user_id).await?))
}
