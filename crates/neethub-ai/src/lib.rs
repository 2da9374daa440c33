pub mod fallback;
pub mod gateway;
pub mod json_output;
pub mod llm_factory;
pub mod llm_provider;
pub mod openai_compatible_provider;
pub mod prompts;

#[cfg(feature = "anthropic")]
pub mod anthropic_provider;

pub use fallback::Fallback;
pub use gateway::{GenerationError, GenerationResult, NeetGateway};
pub use llm_factory::LLMProviderFactory;
pub use llm_provider::*;
pub use openai_compatible_provider::{OpenAICompatibleConfig, OpenAICompatibleProvider};

#[cfg(feature = "anthropic")]
pub use anthropic_provider::{AnthropicConfig, AnthropicProvider};
