use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;
use axum::{extract::State, Json};
use neethub_core::{NewPracticeSession, PracticeSession};
use neethub_store::SESSION_LIST_LIMIT;
use tracing::info;

#[utoipa::path(
    post,
    path = "/api/practice/session",
    tag = "practice",
    request_body = NewPracticeSession,
    responses(
        (status = 200, description = "Stored session", body = PracticeSession),
        (status = 422, description = "Invalid session")
    )
)]
pub async fn create_session(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<NewPracticeSession>,
) -> ApiResult<Json<PracticeSession>> {
    input.validate()?;
    let session = input.into_session();
    state.store.insert_session(&session).await?;
    info!(
        user_id = %session.user_id,
        subject = %session.subject,
        attempted = session.questions_attempted,
        "Recorded practice session"
    );
    Ok(Json(session))
}

/// Sessions in the order they were recorded.
#[utoipa::path(
    get,
    path = "/api/practice/sessions/{user_id}",
    tag = "practice",
    params(("user_id" = String, Path, description = "User id")),
    responses((status = 200, description = "Practice sessions", body = Vec<PracticeSession>))
)]
pub async fn list_sessions(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
) -> ApiResult<Json<Vec<PracticeSession>>> {
    Ok(Json(
        state
            .store
            .list_sessions(&user_id, SESSION_LIST_LIMIT)
            .await?,
    ))
}
