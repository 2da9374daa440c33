//! System instructions and prompt templates.

pub const DEFAULT_SYSTEM: &str = "You are an expert NEET exam question creator and tutor.";
pub const MOTIVATION_SYSTEM: &str = "You are a motivational NEET mentor.";
pub const MCQ_SYSTEM: &str =
    "You are an expert NEET-UG question creator. Always respond with valid JSON only.";
pub const TUTOR_SYSTEM: &str =
    "You are a friendly NEET tutor helping students prepare for medical entrance exams.";
pub const PLANNER_SYSTEM: &str = "You are an expert NEET study planner.";

pub const MOTIVATION: &str = "Generate a short, powerful motivational message (max 2 sentences) for a NEET aspirant.
Focus on: consistency, hard work, NCERT importance, or exam strategy.
Make it uplifting and actionable. No emojis.";

pub const DAILY_QUESTION: &str = r#"Create a NEET-level MCQ question. Return ONLY in this exact JSON format:
{
  "question": "Question text here",
  "options": ["Option A", "Option B", "Option C", "Option D"],
  "correctAnswer": 0,
  "explanation": "Detailed explanation with NCERT reference",
  "subject": "Physics/Chemistry/Biology",
  "chapter": "Chapter name",
  "topic": "Topic name",
  "difficulty": "medium"
}

Make the question from a random important NEET chapter. Use proper medical exam standards."#;

pub fn question_batch(subject: &str, chapter: &str, topic: Option<&str>, count: usize) -> String {
    let topic_text = topic
        .map(|t| format!(" on topic '{}'", t))
        .unwrap_or_default();
    format!(
        r#"Generate {count} NEET-level MCQ questions from {subject}, chapter: {chapter}{topic_text}.

Return as a JSON array in this exact format:
[
  {{
    "question": "Question text",
    "options": ["A", "B", "C", "D"],
    "correctAnswer": 0,
    "explanation": "Detailed explanation",
    "subject": "{subject}",
    "chapter": "{chapter}",
    "topic": "Topic name",
    "difficulty": "medium"
  }}
]

Important:
- All questions must be NCERT-based
- Include detailed explanations
- Mix difficulty levels
- Return ONLY valid JSON array"#
    )
}

pub fn tutor(message: &str) -> String {
    format!(
        r#"You are an expert NEET tutor. A student asks: "{message}"

Provide a clear, concise answer:
- If it's a concept question, explain with NCERT reference
- If it's a problem, provide step-by-step solution
- If it's doubt, clarify with examples
- Keep it under 150 words
- Be encouraging and supportive"#
    )
}

pub fn study_plan(
    duration: u32,
    prep_level: &str,
    daily_hours: u32,
    weak_subjects: &[String],
) -> String {
    let weak_text = if weak_subjects.is_empty() {
        String::new()
    } else {
        format!(" Focus more on: {}", weak_subjects.join(", "))
    };
    format!(
        r#"Create a {duration}-day NEET study plan for a {prep_level} student who can study {daily_hours} hours daily.{weak_text}

Return as JSON:
{{
  "title": "Plan title",
  "dailySchedule": [
    {{
      "day": 1,
      "subjects": ["Physics", "Chemistry", "Biology"],
      "topics": ["Topic 1", "Topic 2"],
      "hours": {daily_hours},
      "goals": ["Goal 1", "Goal 2"]
    }}
  ],
  "weeklyGoals": ["Week goal 1", "Week goal 2"],
  "tips": ["Tip 1", "Tip 2"]
}}

Make it realistic and NCERT-focused."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_prompt_names_subject_chapter_and_topic() {
        let prompt = question_batch("Physics", "Optics", Some("Lenses"), 5);
        assert!(prompt.starts_with("Generate 5 NEET-level MCQ questions from Physics, chapter: Optics on topic 'Lenses'."));
        assert!(prompt.contains(r#""subject": "Physics""#));
        assert!(!question_batch("Physics", "Optics", None, 5).contains("on topic"));
    }

    #[test]
    fn study_plan_prompt_mentions_weak_subjects_only_when_given() {
        let with = study_plan(30, "dropper", 6, &["Physics".into(), "Chemistry".into()]);
        assert!(with.contains("Focus more on: Physics, Chemistry"));
        assert!(with.contains(r#""hours": 6"#));
        assert!(!study_plan(30, "dropper", 6, &[]).contains("Focus more on"));
    }
}
