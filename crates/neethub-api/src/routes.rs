use crate::handlers::{ai, analytics, health, mock_tests, practice, questions, study_plan, syllabus, users};
use crate::openapi::ApiDoc;
use crate::AppState;
use axum::{
    routing::{get, post},
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

fn api_routes() -> Router<AppState> {
    Router::new()
        // Users
        .route("/users", post(users::create_user))
        .route("/users/{id}", get(users::get_user))
        // AI
        .route("/ai/motivation", get(ai::motivation))
        .route("/ai/generate-mcq", post(ai::generate_mcq))
        .route("/ai/buddy", post(ai::buddy))
        .route("/ai/buddy/history/{user_id}", get(ai::chat_history))
        // Questions
        .route("/questions/daily", get(questions::daily_question))
        .route("/questions/generate", post(questions::generate_questions))
        .route("/questions/pregenerated", get(questions::pregenerated_questions))
        .route("/questions/populate-samples", post(questions::populate_samples))
        // Practice and tests
        .route("/practice/session", post(practice::create_session))
        .route("/practice/sessions/{user_id}", get(practice::list_sessions))
        .route("/tests", post(mock_tests::create_test))
        .route("/tests/{user_id}", get(mock_tests::list_tests))
        // Syllabus
        .route("/syllabus/progress", post(syllabus::upsert_progress))
        .route("/syllabus/progress/{user_id}", get(syllabus::list_progress))
        // Study plans
        .route("/study-plan/generate", post(study_plan::generate_study_plan))
        .route("/study-plan/{user_id}", get(study_plan::list_study_plans))
        // Analytics
        .route("/analytics/{user_id}", get(analytics::get_analytics))
}

fn cors_layer(allow_any: bool) -> CorsLayer {
    if allow_any {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(state.settings.server.cors_allow_any);

    Router::new()
        .route("/health", get(health::health))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .nest("/api", api_routes())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}
