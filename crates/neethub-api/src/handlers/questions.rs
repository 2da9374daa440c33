use crate::content_cache::CacheError;
use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiQuery};
use crate::state::AppState;
use axum::{extract::State, Json};
use chrono::Utc;
use neethub_ai::{fallback, Fallback};
use neethub_core::{
    new_id, now, seed, DailyQuestion, GenerateQuestionsRequest, PreGeneratedQuestions,
    PregeneratedQuery, Question, QuestionDraft,
};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionsResponse {
    pub questions: Vec<Question>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PopulateResponse {
    pub message: String,
    pub count: usize,
}

fn into_questions(drafts: Vec<QuestionDraft>) -> Vec<Question> {
    drafts.into_iter().map(QuestionDraft::into_question).collect()
}

/// Question of the day, generated once per UTC date.
#[utoipa::path(
    get,
    path = "/api/questions/daily",
    tag = "questions",
    responses((status = 200, description = "Today's question, or the sample question on failure", body = Question))
)]
pub async fn daily_question(State(state): State<AppState>) -> ApiResult<Json<Question>> {
    let date = Utc::now().format("%Y-%m-%d").to_string();
    let key = format!("daily:{}", date);
    let store = &state.store;
    let gateway = &state.gateway;
    let date = date.as_str();

    let outcome = state
        .cache
        .get_or_generate(
            &key,
            move || async move {
                store
                    .find_daily_question(date)
                    .await
                    .map(|found| found.map(|daily| daily.question))
            },
            move || async move {
                let question = gateway.daily_question().await?.into_question();
                store
                    .insert_daily_question(&DailyQuestion {
                        id: new_id(),
                        date: date.to_string(),
                        question: question.clone(),
                        created_at: now(),
                    })
                    .await?;
                info!(%date, question_id = %question.id, "Stored daily question");
                Ok::<_, CacheError>(question)
            },
        )
        .await;

    let question = match outcome {
        Err(CacheError::Store(e)) => return Err(e.into()),
        other => other.or_fallback("daily question", || {
            fallback::daily_question().into_question()
        }),
    };
    Ok(Json(question))
}

#[utoipa::path(
    post,
    path = "/api/questions/generate",
    tag = "questions",
    request_body = GenerateQuestionsRequest,
    responses(
        (status = 200, description = "Generated and stored questions", body = QuestionsResponse),
        (status = 422, description = "Invalid request"),
        (status = 500, description = "Generation failed")
    )
)]
pub async fn generate_questions(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<GenerateQuestionsRequest>,
) -> ApiResult<Json<QuestionsResponse>> {
    let count = input.validate()?;
    let drafts = state
        .gateway
        .question_batch(&input.subject, &input.chapter, input.topic.as_deref(), count)
        .await?;
    let questions = into_questions(drafts);
    state.store.insert_questions(&questions).await?;
    info!(
        subject = %input.subject,
        chapter = %input.chapter,
        count = questions.len(),
        "Stored generated questions"
    );
    Ok(Json(QuestionsResponse { questions }))
}

/// Reuse a stored batch for the chapter when it is large enough, otherwise
/// generate and store a new one. Returns `min(count, available)` questions.
#[utoipa::path(
    get,
    path = "/api/questions/pregenerated",
    tag = "questions",
    params(PregeneratedQuery),
    responses(
        (status = 200, description = "Questions for the chapter", body = QuestionsResponse),
        (status = 422, description = "Invalid query"),
        (status = 500, description = "Generation failed")
    )
)]
pub async fn pregenerated_questions(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<PregeneratedQuery>,
) -> ApiResult<Json<QuestionsResponse>> {
    let count = query.validate()?;
    let key = format!("pregenerated:{}|{}", query.subject, query.chapter);
    let store = &state.store;
    let gateway = &state.gateway;
    let subject = query.subject.as_str();
    let chapter = query.chapter.as_str();

    let questions = state
        .cache
        .get_or_generate(
            &key,
            move || async move {
                store
                    .find_pregenerated(subject, chapter, count)
                    .await
                    .map(|found| {
                        found
                            .filter(|set| set.questions.len() >= count)
                            .map(|set| set.questions.into_iter().take(count).collect::<Vec<_>>())
                    })
            },
            move || async move {
                let questions = into_questions(
                    gateway
                        .question_batch(subject, chapter, None, count)
                        .await?,
                );
                store
                    .insert_pregenerated(&PreGeneratedQuestions {
                        id: new_id(),
                        subject: subject.to_string(),
                        chapter: chapter.to_string(),
                        question_count: questions.len(),
                        questions: questions.clone(),
                        created_at: now(),
                    })
                    .await?;
                info!(%subject, %chapter, count = questions.len(), "Stored pre-generated questions");
                Ok::<_, CacheError>(questions)
            },
        )
        .await?;

    Ok(Json(QuestionsResponse { questions }))
}

/// Append the built-in sample bank. Every call adds another full set.
#[utoipa::path(
    post,
    path = "/api/questions/populate-samples",
    tag = "questions",
    responses((status = 200, description = "Number of questions inserted", body = PopulateResponse))
)]
pub async fn populate_samples(State(state): State<AppState>) -> ApiResult<Json<PopulateResponse>> {
    let questions = into_questions(seed::sample_questions());
    let count = state.store.insert_questions(&questions).await?;
    info!(count, "Populated sample questions");
    Ok(Json(PopulateResponse {
        message: format!("Successfully populated {} sample questions", count),
        count,
    }))
}
