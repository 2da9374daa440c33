use crate::json_output::extract_json;
use crate::llm_provider::{GenerationConfig, LLMProvider};
use crate::prompts;
use neethub_core::QuestionDraft;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("LLM request failed: {0}")]
    Upstream(String),

    #[error("LLM output is not valid JSON: {0}")]
    MalformedOutput(String),

    #[error("LLM output has the wrong shape: {0}")]
    InvalidShape(String),
}

pub type GenerationResult<T> = std::result::Result<T, GenerationError>;

/// Typed NEET content generation on top of an [`LLMProvider`].
#[derive(Clone)]
pub struct NeetGateway {
    provider: Arc<dyn LLMProvider>,
    generation: GenerationConfig,
}

fn shaped<T: DeserializeOwned>(value: Value) -> GenerationResult<T> {
    serde_json::from_value(value).map_err(|e| GenerationError::InvalidShape(e.to_string()))
}

fn non_empty(text: String) -> GenerationResult<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(GenerationError::MalformedOutput("empty response".into()))
    } else {
        Ok(trimmed.to_string())
    }
}

fn checked(draft: QuestionDraft) -> GenerationResult<QuestionDraft> {
    draft.validate().map_err(GenerationError::InvalidShape)?;
    Ok(draft)
}

impl NeetGateway {
    pub fn new(provider: Arc<dyn LLMProvider>, generation: GenerationConfig) -> Self {
        Self {
            provider,
            generation,
        }
    }

    pub fn provider(&self) -> &Arc<dyn LLMProvider> {
        &self.provider
    }

    async fn complete(&self, system: &str, prompt: &str) -> GenerationResult<String> {
        let start = Instant::now();
        let response = self
            .provider
            .generate_with_system(system, prompt, &self.generation)
            .await
            .map_err(|e| GenerationError::Upstream(format!("{:#}", e)))?;
        debug!(
            provider = self.provider.provider_name(),
            model = %response.model,
            tokens = ?response.total_tokens,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "completion received"
        );
        Ok(response.content)
    }

    async fn complete_json(&self, system: &str, prompt: &str) -> GenerationResult<Value> {
        let text = self.complete(system, prompt).await?;
        extract_json(&text).map_err(GenerationError::MalformedOutput)
    }

    #[instrument(skip(self))]
    pub async fn motivation(&self) -> GenerationResult<String> {
        non_empty(
            self.complete(prompts::MOTIVATION_SYSTEM, prompts::MOTIVATION)
                .await?,
        )
    }

    #[instrument(skip(self))]
    pub async fn daily_question(&self) -> GenerationResult<QuestionDraft> {
        let value = self
            .complete_json(prompts::DEFAULT_SYSTEM, prompts::DAILY_QUESTION)
            .await?;
        checked(shaped(value)?)
    }

    /// Generate up to `count` questions. Every returned question is well formed;
    /// a batch with any malformed entry is rejected as a whole.
    #[instrument(skip(self))]
    pub async fn question_batch(
        &self,
        subject: &str,
        chapter: &str,
        topic: Option<&str>,
        count: usize,
    ) -> GenerationResult<Vec<QuestionDraft>> {
        let prompt = prompts::question_batch(subject, chapter, topic, count);
        let value = self.complete_json(prompts::DEFAULT_SYSTEM, &prompt).await?;

        // Some models wrap the array as {"questions": [...]}.
        let items = match value {
            Value::Array(items) => items,
            Value::Object(mut fields) => match fields.remove("questions") {
                Some(Value::Array(items)) => items,
                _ => {
                    return Err(GenerationError::InvalidShape(
                        "expected a JSON array of questions".into(),
                    ))
                }
            },
            _ => {
                return Err(GenerationError::InvalidShape(
                    "expected a JSON array of questions".into(),
                ))
            }
        };

        let mut drafts = items
            .into_iter()
            .map(|item| checked(shaped(item)?))
            .collect::<GenerationResult<Vec<_>>>()?;
        if drafts.is_empty() {
            return Err(GenerationError::InvalidShape("no questions returned".into()));
        }
        drafts.truncate(count);
        Ok(drafts)
    }

    /// Caller-supplied prompt; any JSON value is accepted.
    #[instrument(skip(self, prompt))]
    pub async fn raw_json(&self, prompt: &str) -> GenerationResult<Value> {
        self.complete_json(prompts::MCQ_SYSTEM, prompt).await
    }

    #[instrument(skip(self, message))]
    pub async fn tutor_answer(&self, message: &str) -> GenerationResult<String> {
        non_empty(
            self.complete(prompts::TUTOR_SYSTEM, &prompts::tutor(message))
                .await?,
        )
    }

    /// The plan must be a JSON object.
    #[instrument(skip(self))]
    pub async fn study_plan(
        &self,
        duration: u32,
        prep_level: &str,
        daily_hours: u32,
        weak_subjects: &[String],
    ) -> GenerationResult<Value> {
        let prompt = prompts::study_plan(duration, prep_level, daily_hours, weak_subjects);
        match self.complete_json(prompts::PLANNER_SYSTEM, &prompt).await? {
            plan @ Value::Object(_) => Ok(plan),
            _ => Err(GenerationError::InvalidShape(
                "study plan must be a JSON object".into(),
            )),
        }
    }
}
