//! Persisted entities.
//!
//! Every record carries a generated string id and a creation (or update)
//! timestamp. Field names are camelCase on the wire and in the store so the
//! documents read the same from either side.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

/// Generate a fresh record identifier.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current time truncated to microseconds, the precision timestamps are
/// stored with.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Fixed-width RFC 3339 timestamps, so that string ordering in the store
/// matches chronological ordering.
pub mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn format(value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::Micros, true)
    }

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum PrepLevel {
    Class11,
    #[default]
    Class12,
    Dropper,
}

impl fmt::Display for PrepLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrepLevel::Class11 => write!(f, "class11"),
            PrepLevel::Class12 => write!(f, "class12"),
            PrepLevel::Dropper => write!(f, "dropper"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub prep_level: PrepLevel,
    #[serde(default)]
    pub weak_areas: Vec<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Question content without identity, as produced by the LLM or the seed bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: u8,
    pub explanation: String,
    pub subject: String,
    pub chapter: String,
    pub topic: String,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
}

fn default_difficulty() -> String {
    "medium".to_string()
}

pub const OPTIONS_PER_QUESTION: usize = 4;

impl QuestionDraft {
    /// Check the shape every stored question must have.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.question.trim().is_empty() {
            return Err("question text is empty".into());
        }
        if self.options.len() != OPTIONS_PER_QUESTION {
            return Err(format!(
                "expected {} options, got {}",
                OPTIONS_PER_QUESTION,
                self.options.len()
            ));
        }
        if self.options.iter().any(|o| o.trim().is_empty()) {
            return Err("options must not be empty".into());
        }
        if usize::from(self.correct_answer) >= self.options.len() {
            return Err(format!(
                "correctAnswer {} is out of range",
                self.correct_answer
            ));
        }
        Ok(())
    }

    pub fn into_question(self) -> Question {
        Question {
            id: new_id(),
            question: self.question,
            options: self.options,
            correct_answer: self.correct_answer,
            explanation: self.explanation,
            subject: self.subject,
            chapter: self.chapter,
            topic: self.topic,
            difficulty: self.difficulty,
            created_at: now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: u8,
    pub explanation: String,
    pub subject: String,
    pub chapter: String,
    pub topic: String,
    pub difficulty: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PracticeSession {
    pub id: String,
    pub user_id: String,
    pub subject: String,
    pub chapter: String,
    #[serde(default)]
    pub questions_attempted: u32,
    #[serde(default)]
    pub questions_correct: u32,
    /// Seconds.
    #[serde(default)]
    pub time_spent: u64,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TestType {
    Full,
    Subject,
    Chapter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MockTest {
    pub id: String,
    pub user_id: String,
    pub test_type: TestType,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub chapter: Option<String>,
    pub total_questions: u32,
    pub correct_answers: u32,
    pub score: f64,
    /// Seconds.
    pub time_spent: u64,
    pub accuracy: f64,
    #[serde(default)]
    pub weak_chapters: Vec<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    NotStarted,
    InProgress,
    Completed,
    Revision,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SyllabusProgress {
    pub id: String,
    pub user_id: String,
    pub class_type: String,
    pub subject_id: String,
    pub chapter_id: String,
    pub topic_id: String,
    pub status: ProgressStatus,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl SyllabusProgress {
    /// Composite key a progress record is unique on.
    pub fn key(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}",
            self.user_id, self.class_type, self.subject_id, self.chapter_id, self.topic_id
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreGeneratedQuestions {
    pub id: String,
    pub subject: String,
    pub chapter: String,
    pub questions: Vec<Question>,
    pub question_count: usize,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// The question of the day, cached per UTC calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyQuestion {
    pub id: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub question: Question,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlan {
    pub id: String,
    pub user_id: String,
    pub title: String,
    /// Days.
    pub duration: u32,
    pub daily_hours: u32,
    pub subjects: Vec<String>,
    #[schema(value_type = Object)]
    pub plan: serde_json::Value,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub user_id: String,
    pub message: String,
    pub response: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> QuestionDraft {
        QuestionDraft {
            question: "What is the SI unit of force?".into(),
            options: vec!["Newton".into(), "Joule".into(), "Watt".into(), "Pascal".into()],
            correct_answer: 0,
            explanation: "F = ma".into(),
            subject: "Physics".into(),
            chapter: "Laws of Motion".into(),
            topic: "Newton's Laws".into(),
            difficulty: "easy".into(),
        }
    }

    #[test]
    fn draft_with_four_options_is_valid() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn draft_rejects_out_of_range_answer() {
        let mut d = draft();
        d.correct_answer = 4;
        assert!(d.validate().unwrap_err().contains("out of range"));
    }

    #[test]
    fn draft_rejects_wrong_option_count() {
        let mut d = draft();
        d.options.pop();
        assert!(d.validate().is_err());
    }

    #[test]
    fn llm_payload_without_difficulty_defaults_to_medium() {
        let json = serde_json::json!({
            "question": "Q",
            "options": ["a", "b", "c", "d"],
            "correctAnswer": 2,
            "explanation": "e",
            "subject": "Biology",
            "chapter": "Cell",
            "topic": "Organelles"
        });
        let d: QuestionDraft = serde_json::from_value(json).unwrap();
        assert_eq!(d.difficulty, "medium");
        assert_eq!(d.correct_answer, 2);
    }

    #[test]
    fn timestamps_are_fixed_width_and_round_trip() {
        let q = draft().into_question();
        let value = serde_json::to_value(&q).unwrap();
        let raw = value["createdAt"].as_str().unwrap();
        assert_eq!(raw.len(), "2026-01-01T00:00:00.000000Z".len());
        let back: Question = serde_json::from_value(value).unwrap();
        assert_eq!(back, q);
    }

    #[test]
    fn progress_status_uses_snake_case() {
        let v = serde_json::to_value(ProgressStatus::NotStarted).unwrap();
        assert_eq!(v, "not_started");
        assert!(serde_json::from_str::<ProgressStatus>("\"done\"").is_err());
    }
}
