//! Canned content served when generation fails on endpoints that never error.

use neethub_core::QuestionDraft;
use serde_json::{json, Value};
use std::fmt::Display;
use tracing::warn;

pub const MOTIVATION: &str = "Success in NEET comes from consistent practice and deep NCERT understanding. Make every question count today!";

pub const BUDDY_REPLY: &str =
    "I'm having trouble processing your question. Could you please rephrase it?";

pub fn daily_question() -> QuestionDraft {
    QuestionDraft {
        question: "What is the SI unit of force?".into(),
        options: vec![
            "Newton".into(),
            "Joule".into(),
            "Watt".into(),
            "Pascal".into(),
        ],
        correct_answer: 0,
        explanation: "Newton is the SI unit of force, named after Sir Isaac Newton. Force = mass × acceleration.".into(),
        subject: "Physics".into(),
        chapter: "Laws of Motion".into(),
        topic: "Force and Newton's Laws".into(),
        difficulty: "easy".into(),
    }
}

pub fn mcq_set() -> Value {
    json!({
        "subject": "Physics",
        "chapter": "Sample",
        "topic": "Sample",
        "difficulty": "Moderate",
        "questions": [
            {
                "question": "What is the SI unit of force?",
                "options": {
                    "A": "Newton",
                    "B": "Joule",
                    "C": "Watt",
                    "D": "Pascal"
                },
                "correct": "A",
                "explanation": "Force is mass × acceleration, SI unit is kg⋅m/s² = Newton."
            }
        ]
    })
}

/// Substitute canned content for a failed generation.
pub trait Fallback<T> {
    fn or_fallback(self, what: &str, fallback: impl FnOnce() -> T) -> T;
}

impl<T, E: Display> Fallback<T> for Result<T, E> {
    fn or_fallback(self, what: &str, fallback: impl FnOnce() -> T) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                warn!("{} failed, serving fallback: {}", what, e);
                fallback()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_question_is_well_formed() {
        let q = daily_question();
        q.validate().unwrap();
        assert_eq!(q.options[q.correct_answer as usize], "Newton");
    }

    #[test]
    fn mcq_fallback_has_one_question() {
        let set = mcq_set();
        assert_eq!(set["questions"].as_array().unwrap().len(), 1);
        assert_eq!(set["questions"][0]["correct"], "A");
    }

    #[test]
    fn or_fallback_only_runs_on_error() {
        let ok: Result<&str, String> = Ok("generated");
        assert_eq!(ok.or_fallback("motivation", || MOTIVATION), "generated");
        let failed: Result<&str, String> = Err("boom".into());
        assert_eq!(failed.or_fallback("motivation", || MOTIVATION), MOTIVATION);
    }
}
