use crate::handlers::{self, ai, analytics, health, mock_tests, practice, questions, study_plan, syllabus, users};
use neethub_core::{
    AnalyticsSummary, BuddyRequest, ChatMessage, GenerateMcqRequest, GenerateQuestionsRequest,
    MockTest, NewMockTest, NewPracticeSession, NewUser, PracticeSession, PrepLevel,
    ProgressStatus, ProgressUpdate, Question, StudyPlan, StudyPlanRequest, SubjectStats,
    SyllabusProgress, TestType, User,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        users::create_user,
        users::get_user,
        ai::motivation,
        ai::generate_mcq,
        ai::buddy,
        ai::chat_history,
        questions::daily_question,
        questions::generate_questions,
        questions::pregenerated_questions,
        questions::populate_samples,
        practice::create_session,
        practice::list_sessions,
        mock_tests::create_test,
        mock_tests::list_tests,
        syllabus::upsert_progress,
        syllabus::list_progress,
        study_plan::generate_study_plan,
        study_plan::list_study_plans,
        analytics::get_analytics,
    ),
    components(
        schemas(
            User,
            NewUser,
            PrepLevel,
            Question,
            GenerateQuestionsRequest,
            PracticeSession,
            NewPracticeSession,
            MockTest,
            NewMockTest,
            TestType,
            SyllabusProgress,
            ProgressUpdate,
            ProgressStatus,
            StudyPlan,
            StudyPlanRequest,
            ChatMessage,
            BuddyRequest,
            GenerateMcqRequest,
            AnalyticsSummary,
            SubjectStats,
            handlers::MessageResponse,
            handlers::BuddyResponse,
            handlers::QuestionsResponse,
            handlers::PopulateResponse,
            handlers::HealthResponse,
        )
    ),
    tags(
        (name = "users", description = "User records"),
        (name = "questions", description = "Quiz questions, generated or seeded"),
        (name = "ai", description = "Motivation, MCQ pass-through and the study buddy"),
        (name = "practice", description = "Practice sessions"),
        (name = "tests", description = "Mock tests"),
        (name = "syllabus", description = "Syllabus progress"),
        (name = "study-plan", description = "Generated study plans"),
        (name = "analytics", description = "Per-user performance summary"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
