use crate::error::{ApiError, ApiResult};
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;
use axum::{extract::State, Json};
use neethub_core::{NewUser, User};
use tracing::{debug, info};

/// Create a user, or return the existing one registered under the same email.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = NewUser,
    responses(
        (status = 200, description = "Created or existing user", body = User),
        (status = 422, description = "Invalid user payload")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<NewUser>,
) -> ApiResult<Json<User>> {
    input.validate()?;
    let email = input.normalized_email();
    let key = format!("user:{}", email);
    let store = &state.store;
    let email = email.as_str();

    let user = state
        .cache
        .with_key_lock(&key, move || async move {
            if let Some(existing) = store.find_user_by_email(email).await? {
                debug!(user_id = %existing.id, "User already registered");
                return Ok::<_, ApiError>(existing);
            }
            let user = input.into_user();
            store.insert_user(&user).await?;
            info!(user_id = %user.id, "Created user");
            Ok(user)
        })
        .await?;

    Ok(Json(user))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User record", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> ApiResult<Json<User>> {
    state
        .store
        .get_user(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("User not found".into()))
}
