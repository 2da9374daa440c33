#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use neethub_ai::{
    prompts, GenerationConfig, LLMProvider, LLMResponse, LLMResult, Message, MessageRole,
};
use neethub_api::{create_router, AppState};
use neethub_core::Settings;
use neethub_store::{MemoryDocumentStore, NeetStore};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub const MOTIVATION_REPLY: &str = "Every mistake today is a mark saved in May.";
pub const TUTOR_REPLY: &str = "Photosynthesis takes place in the chloroplasts.";
pub const PLAN_TITLE: &str = "Focused Revision Plan";

/// Answers by system prompt, counts calls, and can be switched to fail.
pub struct StubProvider {
    calls: AtomicUsize,
    failing: AtomicBool,
    delay: Duration,
    batch_size: usize,
}

impl StubProvider {
    pub fn new() -> Arc<Self> {
        Self::with_delay(Duration::ZERO)
    }

    pub fn with_delay(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
            delay,
            batch_size: 50,
        })
    }

    /// Question batches hold `batch_size` questions whatever count is asked.
    pub fn with_batch_size(batch_size: usize) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
            delay: Duration::ZERO,
            batch_size,
        })
    }

    pub fn failing() -> Arc<Self> {
        let provider = Self::new();
        provider.failing.store(true, Ordering::SeqCst);
        provider
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn reply(&self, system: &str, prompt: &str) -> String {
        match system {
            prompts::MOTIVATION_SYSTEM => format!("  {}\n", MOTIVATION_REPLY),
            prompts::TUTOR_SYSTEM => TUTOR_REPLY.to_string(),
            prompts::PLANNER_SYSTEM => {
                json!({"title": PLAN_TITLE, "weeks": [{"week": 1, "focus": "Mechanics"}]})
                    .to_string()
            }
            prompts::MCQ_SYSTEM => json!({"questions": [question_json("Custom MCQ", 1)]}).to_string(),
            _ if prompt == prompts::DAILY_QUESTION => {
                format!("```json\n{}\n```", question_json("Daily question", 0))
            }
            _ => {
                let batch: Vec<Value> = (0..self.batch_size)
                    .map(|i| question_json(&format!("Generated question {}", i), 0))
                    .collect();
                Value::Array(batch).to_string()
            }
        }
    }
}

pub fn question_json(text: &str, n: usize) -> Value {
    json!({
        "question": format!("{} #{}", text, n),
        "options": ["Newton", "Joule", "Watt", "Pascal"],
        "correctAnswer": 0,
        "explanation": "F = ma",
        "subject": "Physics",
        "chapter": "Laws of Motion",
        "topic": "Force",
        "difficulty": "easy"
    })
}

#[async_trait]
impl LLMProvider for StubProvider {
    async fn generate_chat(
        &self,
        messages: &[Message],
        _config: &GenerationConfig,
    ) -> LLMResult<LLMResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(anyhow::anyhow!("upstream unavailable"));
        }

        let text_for = |role: MessageRole| {
            messages
                .iter()
                .find(|m| m.role == role)
                .map(|m| m.content.as_str())
                .unwrap_or_default()
        };
        Ok(LLMResponse {
            content: self.reply(text_for(MessageRole::System), text_for(MessageRole::User)),
            total_tokens: None,
            prompt_tokens: None,
            completion_tokens: None,
            finish_reason: Some("stop".into()),
            model: "stub".into(),
        })
    }

    async fn is_available(&self) -> bool {
        true
    }

    fn provider_name(&self) -> &str {
        "stub"
    }

    fn model_name(&self) -> &str {
        "stub-model"
    }
}

pub fn test_settings() -> Settings {
    let mut settings = Settings::default();
    settings.store.url = Some("memory".into());
    settings.store.name = Some("neethub_test".into());
    settings.cache.generation_timeout_secs = 5;
    settings
}

pub fn test_state(provider: Arc<StubProvider>) -> AppState {
    let store = NeetStore::new(Arc::new(MemoryDocumentStore::new()));
    AppState::from_parts(test_settings(), store, provider)
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(create_router(state)).expect("test server")
}
