pub mod memory_storage;
pub mod repository;
pub mod surrealdb_storage;
pub mod traits;

pub use memory_storage::MemoryDocumentStore;
pub use repository::*;
pub use surrealdb_storage::SurrealDocumentStore;
pub use traits::*;

use neethub_core::{Result, StoreConfig};
use std::sync::Arc;
use tracing::info;

/// URL that selects the in-process backend.
pub const MEMORY_URL: &str = "memory";

/// Open the backend named by `config.url`.
pub async fn connect(config: &StoreConfig) -> Result<NeetStore> {
    let backend: Arc<dyn DocumentStore> = match config.url.as_deref() {
        Some(MEMORY_URL) => {
            info!("Using in-memory document store");
            Arc::new(MemoryDocumentStore::new())
        }
        _ => Arc::new(SurrealDocumentStore::connect(config).await?),
    };
    Ok(NeetStore::new(backend))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_url_selects_in_process_backend() {
        let config = StoreConfig {
            url: Some(MEMORY_URL.into()),
            name: Some("neethub".into()),
            ..StoreConfig::default()
        };
        let store = connect(&config).await.unwrap();
        assert_eq!(store.backend().backend_name(), "memory");
        store.ping().await.unwrap();
    }

    #[tokio::test]
    async fn missing_url_is_a_configuration_error() {
        let result = connect(&StoreConfig::default()).await;
        assert!(matches!(
            result,
            Err(neethub_core::NeetHubError::Configuration(_))
        ));
    }
}
