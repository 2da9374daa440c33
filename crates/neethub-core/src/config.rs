use std::{
    env,
    path::{Path, PathBuf},
};

use config as cfg;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required setting: {0}")]
    Missing(String),

    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allow any origin, method and header (browser clients on other hosts).
    pub cors_allow_any: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8001,
            cors_allow_any: true,
        }
    }
}

/// Document store connection.
///
/// `url` selects the backend: `memory` keeps everything in process, any
/// other URL (`ws://`, `wss://`, `http://`, `https://`) is handed to
/// SurrealDB.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub url: Option<String>,
    /// Database name inside the namespace.
    pub name: Option<String>,
    pub namespace: String,
    pub username: Option<String>,
    #[serde(skip_serializing)]
    pub password: Option<SecretString>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: None,
            name: None,
            namespace: "neethub".into(),
            username: None,
            password: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// "openai", "openai-compatible" or "anthropic"
    pub provider: String,
    pub model: Option<String>,
    /// Override for the provider's API base URL.
    pub base_url: Option<String>,
    #[serde(skip_serializing)]
    pub api_key: Option<SecretString>,
    pub timeout_secs: u64,
    /// Retries after the first failed attempt. Zero disables retrying.
    pub max_retries: u32,
    pub temperature: f32,
    pub max_tokens: usize,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "openai".into(),
            model: None,
            base_url: None,
            api_key: None,
            timeout_secs: 60,
            max_retries: 0,
            temperature: 0.7,
            max_tokens: 4096,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Upper bound on one generate-and-store round for a cache key.
    pub generation_timeout_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            generation_timeout_secs: 90,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "Settings::default_env")]
    pub env: String,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            env: Self::default_env(),
            server: ServerConfig::default(),
            store: StoreConfig::default(),
            llm: LlmConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}

impl Settings {
    fn default_env() -> String {
        env::var("APP_ENV")
            .ok()
            .or_else(|| env::var("RUST_ENV").ok())
            .unwrap_or_else(|| "development".to_string())
    }

    /// Load settings with the following precedence (last wins):
    /// 1. `config/default.toml`
    /// 2. `config/{APP_ENV}.toml`
    /// 3. `config/local.toml`
    /// 4. `NEETHUB__*` environment variables
    /// 5. flat variables (`STORE_URL`, `STORE_NAME`, `LLM_API_KEY`, ...)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        let config_dir = env::var("NEETHUB_CONFIG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config"));

        let settings = Self::load_from_sources(&config_dir, &Self::default_env())?;
        let settings = settings.apply_env_overrides();
        settings.validate()?;

        info!(
            env = %settings.env,
            store = settings.store.url.as_deref().unwrap_or_default(),
            llm_provider = %settings.llm.provider,
            "Configuration loaded"
        );
        Ok(settings)
    }

    fn load_dotenv() {
        if Path::new(".env").exists() {
            if let Err(e) = dotenv::from_filename(".env") {
                warn!("Failed to load .env file: {}", e);
            } else {
                info!("Loaded .env file from current directory");
            }
        }
    }

    pub fn load_from_sources(config_dir: &Path, env_name: &str) -> Result<Self, ConfigError> {
        cfg::Config::builder()
            .add_source(cfg::File::from(config_dir.join("default.toml")).required(false))
            .add_source(
                cfg::File::from(config_dir.join(format!("{}.toml", env_name))).required(false),
            )
            .add_source(cfg::File::from(config_dir.join("local.toml")).required(false))
            .add_source(cfg::Environment::with_prefix("NEETHUB").separator("__"))
            .build()
            .map_err(|e| ConfigError::Load(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ConfigError::Load(e.to_string()))
    }

    /// Flat variables kept for deployments that only set the three required
    /// values.
    pub fn apply_env_overrides(mut self) -> Self {
        if let Ok(url) = env::var("STORE_URL") {
            self.store.url = Some(url);
        }
        if let Ok(name) = env::var("STORE_NAME") {
            self.store.name = Some(name);
        }
        if let Ok(key) = env::var("LLM_API_KEY") {
            self.llm.api_key = Some(SecretString::from(key));
        }
        if let Ok(provider) = env::var("LLM_PROVIDER") {
            self.llm.provider = provider;
        }
        if let Ok(model) = env::var("LLM_MODEL") {
            self.llm.model = Some(model);
        }
        if let Ok(base) = env::var("LLM_BASE_URL") {
            self.llm.base_url = Some(base);
        }
        if let Ok(port) = env::var("PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(e) => warn!("Ignoring invalid PORT '{}': {}", port, e),
            }
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        fn present(value: Option<&str>) -> bool {
            value.map(|v| !v.trim().is_empty()).unwrap_or(false)
        }

        if !present(self.store.url.as_deref()) {
            return Err(ConfigError::Missing("store.url (STORE_URL)".into()));
        }
        if !present(self.store.name.as_deref()) {
            return Err(ConfigError::Missing("store.name (STORE_NAME)".into()));
        }
        if !present(self.llm.api_key.as_ref().map(|k| k.expose_secret())) {
            return Err(ConfigError::Missing("llm.api_key (LLM_API_KEY)".into()));
        }
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Invalid("server.host must not be empty".into()));
        }
        match self.llm.provider.as_str() {
            "openai" | "openai-compatible" | "anthropic" => {}
            other => {
                return Err(ConfigError::Invalid(format!(
                    "Unsupported LLM provider: {}. Must be one of: openai, openai-compatible, anthropic",
                    other
                )))
            }
        }
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(ConfigError::Invalid(
                "llm.temperature must be between 0.0 and 2.0".into(),
            ));
        }
        if self.cache.generation_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "cache.generation_timeout_secs must be positive".into(),
            ));
        }
        Ok(())
    }

    /// The store URL once validated.
    pub fn store_url(&self) -> &str {
        self.store.url.as_deref().unwrap_or_default()
    }

    /// The store (database) name once validated.
    pub fn store_name(&self) -> &str {
        self.store.name.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn complete() -> Settings {
        let mut settings = Settings::default();
        settings.store.url = Some("memory".into());
        settings.store.name = Some("neethub".into());
        settings.llm.api_key = Some(SecretString::from("sk-test".to_string()));
        settings
    }

    #[test]
    fn complete_settings_validate() {
        complete().validate().unwrap();
    }

    #[test]
    fn each_required_value_is_fatal_when_missing() {
        let mut s = complete();
        s.store.url = None;
        assert!(matches!(s.validate(), Err(ConfigError::Missing(m)) if m.contains("STORE_URL")));

        let mut s = complete();
        s.store.name = Some("  ".into());
        assert!(matches!(s.validate(), Err(ConfigError::Missing(m)) if m.contains("STORE_NAME")));

        let mut s = complete();
        s.llm.api_key = None;
        assert!(matches!(s.validate(), Err(ConfigError::Missing(m)) if m.contains("LLM_API_KEY")));
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let mut s = complete();
        s.llm.provider = "carrier-pigeon".into();
        assert!(matches!(s.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn toml_layers_are_merged() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[server]\nport = 9000\n[store]\nurl = \"memory\"\nname = \"base\"\n",
        )
        .unwrap();
        fs::write(dir.path().join("staging.toml"), "[store]\nname = \"staging\"\n").unwrap();

        let settings = Settings::load_from_sources(dir.path(), "staging").unwrap();
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.store_url(), "memory");
        assert_eq!(settings.store_name(), "staging");
        assert_eq!(settings.store.namespace, "neethub");
        assert_eq!(settings.llm.max_retries, 0);
    }
}
