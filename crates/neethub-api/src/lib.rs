pub mod content_cache;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod state;

pub use content_cache::{CacheError, ContentCache};
pub use error::{ApiError, ApiResult};
pub use openapi::ApiDoc;
pub use routes::create_router;
pub use server::Server;
pub use state::AppState;
