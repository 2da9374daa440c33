use crate::llm_provider::*;
use crate::openai_compatible_provider::{
    OpenAICompatibleConfig, OpenAICompatibleProvider, OPENAI_API_BASE,
};
use anyhow::{anyhow, Result};
use neethub_core::LlmConfig;
use secrecy::ExposeSecret;
use std::sync::Arc;

#[cfg(feature = "anthropic")]
use crate::anthropic_provider::{AnthropicConfig, AnthropicProvider};

/// Factory for creating LLM providers based on configuration
pub struct LLMProviderFactory;

impl LLMProviderFactory {
    /// Create an LLM provider from configuration
    pub fn create_from_config(config: &LlmConfig) -> Result<Arc<dyn LLMProvider>> {
        let provider_name = config.provider.to_lowercase();

        match provider_name.as_str() {
            "openai" | "openai-compatible" => Self::create_openai_compatible_provider(config),
            #[cfg(feature = "anthropic")]
            "anthropic" => Self::create_anthropic_provider(config),
            _ => Err(anyhow!(
                "Unsupported LLM provider: {}. Available providers: {}",
                provider_name,
                Self::supported_providers().join(", ")
            )),
        }
    }

    fn api_key(config: &LlmConfig) -> Option<String> {
        config
            .api_key
            .as_ref()
            .map(|k| k.expose_secret().to_string())
            .filter(|k| !k.trim().is_empty())
    }

    fn create_openai_compatible_provider(config: &LlmConfig) -> Result<Arc<dyn LLMProvider>> {
        let api_key = Self::api_key(config);
        if config.provider == "openai" && api_key.is_none() {
            return Err(anyhow!("OpenAI API key not found. Set LLM_API_KEY"));
        }

        let defaults = OpenAICompatibleConfig::default();
        let compat_config = OpenAICompatibleConfig {
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| OPENAI_API_BASE.to_string()),
            model: config.model.clone().unwrap_or(defaults.model),
            timeout_secs: config.timeout_secs,
            max_retries: config.max_retries,
            api_key,
            provider_name: config.provider.clone(),
        };

        Ok(Arc::new(OpenAICompatibleProvider::new(compat_config)?))
    }

    #[cfg(feature = "anthropic")]
    fn create_anthropic_provider(config: &LlmConfig) -> Result<Arc<dyn LLMProvider>> {
        let api_key = Self::api_key(config)
            .ok_or_else(|| anyhow!("Anthropic API key not found. Set LLM_API_KEY"))?;

        let defaults = AnthropicConfig::default();
        let anthropic_config = AnthropicConfig {
            api_key,
            model: config.model.clone().unwrap_or(defaults.model),
            base_url: config.base_url.clone().unwrap_or(defaults.base_url),
            timeout_secs: config.timeout_secs,
            max_retries: config.max_retries,
        };

        Ok(Arc::new(AnthropicProvider::new(anthropic_config)?))
    }

    /// Sampling parameters shared by every gateway call
    pub fn generation_config(config: &LlmConfig) -> GenerationConfig {
        GenerationConfig {
            temperature: config.temperature,
            max_tokens: Some(config.max_tokens),
            ..Default::default()
        }
    }

    pub fn supported_providers() -> Vec<&'static str> {
        let mut providers = vec!["openai", "openai-compatible"];
        if cfg!(feature = "anthropic") {
            providers.push("anthropic");
        }
        providers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn config(provider: &str, key: Option<&str>) -> LlmConfig {
        LlmConfig {
            provider: provider.to_string(),
            api_key: key.map(|k| SecretString::from(k.to_string())),
            ..Default::default()
        }
    }

    #[test]
    fn openai_provider_is_created_with_key() {
        let provider = LLMProviderFactory::create_from_config(&config("openai", Some("sk-test")))
            .unwrap();
        assert_eq!(provider.provider_name(), "openai");
        assert_eq!(provider.model_name(), "gpt-4o-mini");
    }

    #[test]
    fn openai_without_key_fails() {
        let result = LLMProviderFactory::create_from_config(&config("openai", None));
        assert!(result.is_err());
    }

    #[test]
    fn compatible_endpoint_may_skip_the_key() {
        let mut cfg = config("openai-compatible", None);
        cfg.base_url = Some("http://localhost:11434/v1".into());
        cfg.model = Some("llama3".into());
        let provider = LLMProviderFactory::create_from_config(&cfg).unwrap();
        assert_eq!(provider.model_name(), "llama3");
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let Err(err) = LLMProviderFactory::create_from_config(&config("palm", Some("k"))) else {
            panic!("expected an error");
        };
        assert!(err.to_string().contains("Unsupported LLM provider"));
    }

    #[test]
    fn generation_config_follows_settings() {
        let mut cfg = config("openai", Some("k"));
        cfg.temperature = 0.3;
        cfg.max_tokens = 512;
        let generation = LLMProviderFactory::generation_config(&cfg);
        assert_eq!(generation.temperature, 0.3);
        assert_eq!(generation.max_tokens, Some(512));
    }
}
