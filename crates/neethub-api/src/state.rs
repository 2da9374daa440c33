use crate::content_cache::ContentCache;
use crate::error::ApiError;
use neethub_ai::{LLMProvider, LLMProviderFactory, NeetGateway};
use neethub_core::Settings;
use neethub_store::NeetStore;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Handles shared by every request, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub store: NeetStore,
    pub gateway: NeetGateway,
    pub cache: Arc<ContentCache>,
}

impl AppState {
    /// Connect the configured store and LLM provider.
    pub async fn new(settings: Settings) -> Result<Self, ApiError> {
        let store = neethub_store::connect(&settings.store).await?;
        let provider = LLMProviderFactory::create_from_config(&settings.llm)
            .map_err(|e| ApiError::Internal(format!("LLM provider setup failed: {:#}", e)))?;
        info!(
            store = store.backend().backend_name(),
            provider = provider.provider_name(),
            model = provider.model_name(),
            "Application state ready"
        );
        Ok(Self::from_parts(settings, store, provider))
    }

    /// Assemble state from already-built collaborators.
    pub fn from_parts(settings: Settings, store: NeetStore, provider: Arc<dyn LLMProvider>) -> Self {
        let gateway = NeetGateway::new(
            provider,
            LLMProviderFactory::generation_config(&settings.llm),
        );
        let cache = Arc::new(ContentCache::new(Duration::from_secs(
            settings.cache.generation_timeout_secs,
        )));
        Self {
            settings: Arc::new(settings),
            store,
            gateway,
            cache,
        }
    }
}
