use crate::error::ApiResult;
use crate::extract::ApiPath;
use crate::state::AppState;
use axum::{extract::State, Json};
use neethub_core::{summarize, AnalyticsSummary};
use neethub_store::ANALYTICS_FETCH_LIMIT;
use tracing::debug;

/// Aggregate a user's practice sessions and mock tests.
#[utoipa::path(
    get,
    path = "/api/analytics/{user_id}",
    tag = "analytics",
    params(("user_id" = String, Path, description = "User id")),
    responses((status = 200, description = "Performance summary", body = AnalyticsSummary))
)]
pub async fn get_analytics(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
) -> ApiResult<Json<AnalyticsSummary>> {
    let (sessions, tests) = tokio::try_join!(
        state.store.list_sessions(&user_id, ANALYTICS_FETCH_LIMIT),
        state.store.list_tests(&user_id, ANALYTICS_FETCH_LIMIT),
    )?;
    debug!(%user_id, sessions = sessions.len(), tests = tests.len(), "Summarizing activity");
    Ok(Json(summarize(&sessions, &tests)))
}
