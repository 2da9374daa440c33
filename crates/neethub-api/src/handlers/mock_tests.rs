use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;
use axum::{extract::State, Json};
use neethub_core::{MockTest, NewMockTest};
use neethub_store::TEST_LIST_LIMIT;
use tracing::info;

#[utoipa::path(
    post,
    path = "/api/tests",
    tag = "tests",
    request_body = NewMockTest,
    responses(
        (status = 200, description = "Stored mock test", body = MockTest),
        (status = 422, description = "Invalid mock test")
    )
)]
pub async fn create_test(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<NewMockTest>,
) -> ApiResult<Json<MockTest>> {
    input.validate()?;
    let test = input.into_test();
    state.store.insert_test(&test).await?;
    info!(user_id = %test.user_id, score = test.score, "Recorded mock test");
    Ok(Json(test))
}

#[utoipa::path(
    get,
    path = "/api/tests/{user_id}",
    tag = "tests",
    params(("user_id" = String, Path, description = "User id")),
    responses((status = 200, description = "Mock tests", body = Vec<MockTest>))
)]
pub async fn list_tests(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
) -> ApiResult<Json<Vec<MockTest>>> {
    Ok(Json(state.store.list_tests(&user_id, TEST_LIST_LIMIT).await?))
}
