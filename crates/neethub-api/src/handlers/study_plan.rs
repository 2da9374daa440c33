use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;
use axum::{extract::State, Json};
use neethub_core::{new_id, now, StudyPlan, StudyPlanRequest};
use serde_json::Value;
use tracing::info;

const PLAN_SUBJECTS: [&str; 3] = ["Physics", "Chemistry", "Biology"];

fn plan_title(plan: &Value, duration: u32) -> String {
    plan.get("title")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("{}-Day NEET Study Plan", duration))
}

#[utoipa::path(
    post,
    path = "/api/study-plan/generate",
    tag = "study-plan",
    request_body = StudyPlanRequest,
    responses(
        (status = 200, description = "Generated and stored plan", body = StudyPlan),
        (status = 422, description = "Invalid request"),
        (status = 500, description = "Generation failed")
    )
)]
pub async fn generate_study_plan(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<StudyPlanRequest>,
) -> ApiResult<Json<StudyPlan>> {
    input.validate()?;
    let prep_level = input.prep_level.to_string();
    let plan = state
        .gateway
        .study_plan(
            input.duration,
            &prep_level,
            input.daily_hours,
            &input.weak_subjects,
        )
        .await?;

    let record = StudyPlan {
        id: new_id(),
        user_id: input.user_id,
        title: plan_title(&plan, input.duration),
        duration: input.duration,
        daily_hours: input.daily_hours,
        subjects: PLAN_SUBJECTS.iter().map(|s| s.to_string()).collect(),
        plan,
        created_at: now(),
    };
    state.store.insert_study_plan(&record).await?;
    info!(user_id = %record.user_id, plan_id = %record.id, "Stored study plan");
    Ok(Json(record))
}

#[utoipa::path(
    get,
    path = "/api/study-plan/{user_id}",
    tag = "study-plan",
    params(("user_id" = String, Path, description = "User id")),
    responses((status = 200, description = "Most recent plans, newest first", body = Vec<StudyPlan>))
)]
pub async fn list_study_plans(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
) -> ApiResult<Json<Vec<StudyPlan>>> {
    Ok(Json(state.store.list_study_plans(&user_id).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn title_comes_from_plan_when_present() {
        assert_eq!(
            plan_title(&json!({"title": "Sprint to NEET"}), 30),
            "Sprint to NEET"
        );
        assert_eq!(plan_title(&json!({"title": "  "}), 30), "30-Day NEET Study Plan");
        assert_eq!(plan_title(&json!({"weeks": []}), 7), "7-Day NEET Study Plan");
    }
}
