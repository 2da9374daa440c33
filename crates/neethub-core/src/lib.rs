pub mod analytics;
pub mod config;
pub mod error;
pub mod requests;
pub mod seed;
pub mod types;

pub use analytics::{summarize, AnalyticsSummary, SubjectStats};
pub use config::{CacheConfig, ConfigError, LlmConfig, ServerConfig, Settings, StoreConfig};
pub use error::*;
pub use requests::*;
pub use types::*;
