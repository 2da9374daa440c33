//! Inbound payloads.
//!
//! Every payload rejects unknown fields at decode time and checks its value
//! ranges in `validate`, before anything reaches the store.

use crate::error::{NeetHubError, Result};
use crate::types::*;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_QUESTION_COUNT: usize = 10;
pub const MAX_QUESTION_COUNT: usize = 50;

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(NeetHubError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

fn question_count(count: Option<usize>) -> Result<usize> {
    let count = count.unwrap_or(DEFAULT_QUESTION_COUNT);
    if count == 0 || count > MAX_QUESTION_COUNT {
        return Err(NeetHubError::Validation(format!(
            "count must be between 1 and {MAX_QUESTION_COUNT}"
        )));
    }
    Ok(count)
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub prep_level: Option<PrepLevel>,
}

impl NewUser {
    pub fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        let email = self.email.trim();
        if !email.contains('@') {
            return Err(NeetHubError::Validation(format!(
                "email '{email}' is not a valid address"
            )));
        }
        Ok(())
    }

    pub fn normalized_email(&self) -> String {
        self.email.trim().to_string()
    }

    pub fn into_user(self) -> User {
        User {
            id: new_id(),
            email: self.normalized_email(),
            name: self.name.trim().to_string(),
            prep_level: self.prep_level.unwrap_or_default(),
            weak_areas: Vec::new(),
            created_at: now(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GenerateQuestionsRequest {
    pub subject: String,
    pub chapter: String,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub count: Option<usize>,
}

impl GenerateQuestionsRequest {
    /// Validates the request and returns the effective question count.
    pub fn validate(&self) -> Result<usize> {
        require("subject", &self.subject)?;
        require("chapter", &self.chapter)?;
        question_count(self.count)
    }
}

#[derive(Debug, Clone, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
#[serde(deny_unknown_fields)]
pub struct PregeneratedQuery {
    pub subject: String,
    pub chapter: String,
    pub count: Option<usize>,
}

impl PregeneratedQuery {
    pub fn validate(&self) -> Result<usize> {
        require("subject", &self.subject)?;
        require("chapter", &self.chapter)?;
        question_count(self.count)
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewPracticeSession {
    pub user_id: String,
    pub subject: String,
    pub chapter: String,
    #[serde(default)]
    pub questions_attempted: u32,
    #[serde(default)]
    pub questions_correct: u32,
    #[serde(default)]
    pub time_spent: u64,
}

impl NewPracticeSession {
    pub fn validate(&self) -> Result<()> {
        require("userId", &self.user_id)?;
        require("subject", &self.subject)?;
        if self.questions_correct > self.questions_attempted {
            return Err(NeetHubError::Validation(
                "questionsCorrect cannot exceed questionsAttempted".into(),
            ));
        }
        Ok(())
    }

    pub fn into_session(self) -> PracticeSession {
        PracticeSession {
            id: new_id(),
            user_id: self.user_id,
            subject: self.subject,
            chapter: self.chapter,
            questions_attempted: self.questions_attempted,
            questions_correct: self.questions_correct,
            time_spent: self.time_spent,
            created_at: now(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewMockTest {
    pub user_id: String,
    pub test_type: TestType,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub chapter: Option<String>,
    pub total_questions: u32,
    pub correct_answers: u32,
    pub score: f64,
    pub time_spent: u64,
    pub accuracy: f64,
    #[serde(default)]
    pub weak_chapters: Vec<String>,
}

impl NewMockTest {
    pub fn validate(&self) -> Result<()> {
        require("userId", &self.user_id)?;
        if self.correct_answers > self.total_questions {
            return Err(NeetHubError::Validation(
                "correctAnswers cannot exceed totalQuestions".into(),
            ));
        }
        if !self.score.is_finite() || !self.accuracy.is_finite() {
            return Err(NeetHubError::Validation(
                "score and accuracy must be finite numbers".into(),
            ));
        }
        Ok(())
    }

    pub fn into_test(self) -> MockTest {
        MockTest {
            id: new_id(),
            user_id: self.user_id,
            test_type: self.test_type,
            subject: self.subject,
            chapter: self.chapter,
            total_questions: self.total_questions,
            correct_answers: self.correct_answers,
            score: self.score,
            time_spent: self.time_spent,
            accuracy: self.accuracy,
            weak_chapters: self.weak_chapters,
            created_at: now(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProgressUpdate {
    pub user_id: String,
    pub class_type: String,
    pub subject_id: String,
    pub chapter_id: String,
    pub topic_id: String,
    pub status: ProgressStatus,
}

impl ProgressUpdate {
    pub fn validate(&self) -> Result<()> {
        require("userId", &self.user_id)?;
        require("classType", &self.class_type)?;
        require("subjectId", &self.subject_id)?;
        require("chapterId", &self.chapter_id)?;
        require("topicId", &self.topic_id)
    }

    pub fn into_progress(self) -> SyllabusProgress {
        SyllabusProgress {
            id: new_id(),
            user_id: self.user_id,
            class_type: self.class_type,
            subject_id: self.subject_id,
            chapter_id: self.chapter_id,
            topic_id: self.topic_id,
            status: self.status,
            updated_at: now(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct GenerateMcqRequest {
    pub prompt: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BuddyRequest {
    pub user_id: String,
    pub message: String,
}

impl BuddyRequest {
    pub fn validate(&self) -> Result<()> {
        require("userId", &self.user_id)?;
        require("message", &self.message)
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StudyPlanRequest {
    pub user_id: String,
    pub daily_hours: u32,
    pub duration: u32,
    pub prep_level: PrepLevel,
    #[serde(default)]
    pub weak_subjects: Vec<String>,
}

impl StudyPlanRequest {
    pub fn validate(&self) -> Result<()> {
        require("userId", &self.user_id)?;
        if !(1..=24).contains(&self.daily_hours) {
            return Err(NeetHubError::Validation(
                "dailyHours must be between 1 and 24".into(),
            ));
        }
        if !(1..=365).contains(&self.duration) {
            return Err(NeetHubError::Validation(
                "duration must be between 1 and 365 days".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_defaults_prep_level_and_trims_email() {
        let req: NewUser =
            serde_json::from_str(r#"{"name":"A","email":" a@x.com "}"#).unwrap();
        req.validate().unwrap();
        let user = req.into_user();
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.prep_level, PrepLevel::Class12);
        assert!(user.weak_areas.is_empty());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = serde_json::from_str::<NewUser>(r#"{"name":"A","email":"a@x.com","role":"admin"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("unknown field"));
    }

    #[test]
    fn email_without_at_sign_is_invalid() {
        let req: NewUser = serde_json::from_str(r#"{"name":"A","email":"nope"}"#).unwrap();
        assert!(matches!(req.validate(), Err(NeetHubError::Validation(_))));
    }

    #[test]
    fn question_count_bounds() {
        let mut q = PregeneratedQuery {
            subject: "Physics".into(),
            chapter: "Optics".into(),
            count: None,
        };
        assert_eq!(q.validate().unwrap(), DEFAULT_QUESTION_COUNT);
        q.count = Some(0);
        assert!(q.validate().is_err());
        q.count = Some(MAX_QUESTION_COUNT + 1);
        assert!(q.validate().is_err());
    }

    #[test]
    fn session_correct_cannot_exceed_attempted() {
        let req: NewPracticeSession = serde_json::from_str(
            r#"{"userId":"u","subject":"Physics","chapter":"Optics","questionsAttempted":3,"questionsCorrect":4}"#,
        )
        .unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn progress_update_rejects_unknown_status() {
        let res = serde_json::from_str::<ProgressUpdate>(
            r#"{"userId":"u","classType":"class11","subjectId":"phy","chapterId":"c1","topicId":"t1","status":"finished"}"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn study_plan_hours_are_bounded() {
        let req: StudyPlanRequest = serde_json::from_str(
            r#"{"userId":"u","dailyHours":30,"duration":7,"prepLevel":"dropper"}"#,
        )
        .unwrap();
        assert!(req.validate().is_err());
    }
}
