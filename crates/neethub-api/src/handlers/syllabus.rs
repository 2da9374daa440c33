use crate::error::{ApiError, ApiResult};
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;
use axum::{extract::State, Json};
use neethub_core::{ProgressUpdate, SyllabusProgress};
use tracing::{debug, warn};

/// Upsert progress for one (user, class, subject, chapter, topic).
///
/// The read and the write run under the key's lock so concurrent posts for
/// the same topic leave a single record.
#[utoipa::path(
    post,
    path = "/api/syllabus/progress",
    tag = "syllabus",
    request_body = ProgressUpdate,
    responses(
        (status = 200, description = "Stored progress record", body = SyllabusProgress),
        (status = 422, description = "Invalid progress update")
    )
)]
pub async fn upsert_progress(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ProgressUpdate>,
) -> ApiResult<Json<SyllabusProgress>> {
    input.validate()?;
    let incoming = input.into_progress();
    let key = format!("progress:{}", incoming.key());
    let store = &state.store;

    let saved = state
        .cache
        .with_key_lock(&key, move || async move {
            let existing = store
                .find_progress(
                    &incoming.user_id,
                    &incoming.class_type,
                    &incoming.subject_id,
                    &incoming.chapter_id,
                    &incoming.topic_id,
                )
                .await?;

            match existing {
                Some(mut record) => {
                    record.status = incoming.status;
                    record.updated_at = incoming.updated_at;
                    if !store.update_progress(&record).await? {
                        warn!(progress_id = %record.id, "Progress record vanished before update");
                    }
                    debug!(progress_id = %record.id, "Updated syllabus progress");
                    Ok::<_, ApiError>(record)
                }
                None => {
                    store.insert_progress(&incoming).await?;
                    debug!(progress_id = %incoming.id, "Created syllabus progress");
                    Ok(incoming)
                }
            }
        })
        .await?;

    Ok(Json(saved))
}

#[utoipa::path(
    get,
    path = "/api/syllabus/progress/{user_id}",
    tag = "syllabus",
    params(("user_id" = String, Path, description = "User id")),
    responses((status = 200, description = "Progress records", body = Vec<SyllabusProgress>))
)]
pub async fn list_progress(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
) -> ApiResult<Json<Vec<SyllabusProgress>>> {
    Ok(Json(state.store.list_progress(&user_id).await?))
}
